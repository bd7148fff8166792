//! Drag-and-drop gestures driven through the interaction controller.

use strictly_hanoi::{
    BoardLayout, Disk, DragState, DropOutcome, IllegalMoveError, InteractionController, Peg,
    Point, PuzzleEngine, RollbackReason,
};

fn controller(n: u8) -> InteractionController {
    InteractionController::new(PuzzleEngine::new(n).unwrap(), BoardLayout::classic())
}

/// Center of the top disk of `peg`, where a player would press.
fn top_of(controller: &InteractionController, peg: Peg) -> Point {
    let layout = controller.layout();
    let bounds = layout
        .top_disk_bounds(peg, controller.engine().peg(peg))
        .expect("Peg has a disk");
    Point::new(bounds.x + bounds.width / 2, bounds.y + bounds.height / 2)
}

/// Drags the top disk of `origin` and drops it over `dest`, far above the board.
fn drag(controller: &mut InteractionController, origin: Peg, dest: Peg) -> DropOutcome {
    let start = top_of(controller, origin);
    assert!(controller.pointer_down(start), "Grab on {} failed", origin);

    let drop_x = controller.layout().peg_center_x(dest);
    controller.pointer_move(Point::new(drop_x, 10));
    controller.pointer_up(Point::new(drop_x, 10))
}

#[test]
fn test_solve_by_dragging() {
    let mut controller = controller(3);
    let sequence = [
        (Peg::Left, Peg::Right),
        (Peg::Left, Peg::Middle),
        (Peg::Right, Peg::Middle),
        (Peg::Left, Peg::Right),
        (Peg::Middle, Peg::Left),
        (Peg::Middle, Peg::Right),
        (Peg::Left, Peg::Right),
    ];

    for (origin, dest) in sequence {
        assert!(drag(&mut controller, origin, dest).is_move());
        assert_eq!(controller.state(), DragState::Idle);
    }

    assert!(controller.engine().is_solved());
    assert_eq!(controller.engine().move_count(), 7);
}

#[test]
fn test_illegal_drop_rolls_back() {
    let mut controller = controller(3);
    drag(&mut controller, Peg::Left, Peg::Right);
    let before = controller.engine().snapshot();

    let outcome = drag(&mut controller, Peg::Left, Peg::Right);
    assert_eq!(
        outcome,
        DropOutcome::RolledBack {
            origin: Peg::Left,
            reason: RollbackReason::Illegal(IllegalMoveError::LargerOntoSmaller {
                disk: Disk::new(2),
                onto: Disk::new(1),
            }),
        }
    );
    assert_eq!(controller.engine().snapshot(), before);
    assert_eq!(controller.state(), DragState::Idle);
}

#[test]
fn test_drop_on_origin_is_a_rollback() {
    let mut controller = controller(3);
    let outcome = drag(&mut controller, Peg::Left, Peg::Left);
    assert!(matches!(
        outcome,
        DropOutcome::RolledBack {
            reason: RollbackReason::Illegal(IllegalMoveError::SamePeg(Peg::Left)),
            ..
        }
    ));
    assert_eq!(controller.engine().move_count(), 0);
}

#[test]
fn test_press_on_empty_board_area_stays_idle() {
    let mut controller = controller(3);
    assert!(!controller.pointer_down(Point::new(300, 340)));
    assert!(!controller.pointer_down(Point::new(-5, -5)));
    assert_eq!(controller.state(), DragState::Idle);
    assert_eq!(controller.pointer_up(Point::new(300, 10)), DropOutcome::NoGesture);
}

#[test]
fn test_pointer_move_without_drag_is_ignored() {
    let mut controller = controller(3);
    controller.pointer_move(Point::new(100, 300));
    assert_eq!(controller.state(), DragState::Idle);
    assert_eq!(controller.dragged_disk_bounds(), None);
}

#[test]
fn test_cancel_abandons_drag() {
    let mut controller = controller(3);
    let start = top_of(&controller, Peg::Left);
    controller.pointer_down(start);

    assert_eq!(
        controller.cancel(),
        DropOutcome::RolledBack {
            origin: Peg::Left,
            reason: RollbackReason::Cancelled,
        }
    );
    assert_eq!(controller.pointer_up(start), DropOutcome::NoGesture);
    assert_eq!(controller.engine().move_count(), 0);
}

#[test]
fn test_restart_changes_disk_count() {
    let mut controller = controller(3);
    drag(&mut controller, Peg::Left, Peg::Middle);

    controller.restart(strictly_hanoi::DiskCount::new(6).unwrap());
    assert_eq!(controller.engine().disk_count().get(), 6);
    assert_eq!(controller.engine().move_count(), 0);
    assert_eq!(controller.engine().peg(Peg::Left).size(), 6);
}

#[test]
fn test_resizing_layout_cancels_drag() {
    let mut controller = controller(3);
    let start = top_of(&controller, Peg::Left);
    controller.pointer_down(start);

    controller.set_layout(BoardLayout::new(10, 20, 30, 1, 2, 5));
    assert_eq!(controller.state(), DragState::Idle);
}

#[test]
fn test_press_on_overlapping_top_disks_is_ignored() {
    // Pegs 10 apart, so neighbouring disks overlap.
    let layout = BoardLayout::new(100, 10, 100, 10, 20, 4);
    let mut engine = PuzzleEngine::new(3).unwrap();
    engine.apply_move(Peg::Left, Peg::Middle).unwrap();
    let mut controller = InteractionController::new(engine, layout);

    // Left top (disk 2) spans x 80..=120, y 80..=90; Middle top (disk 1)
    // spans x 100..=120, y 90..=100. Both contain (105, 90).
    assert!(!controller.pointer_down(Point::new(105, 90)));
    assert_eq!(controller.state(), DragState::Idle);

    // Only the Left disk contains (105, 85).
    assert!(controller.pointer_down(Point::new(105, 85)));
    assert_eq!(controller.active_peg(), Some(Peg::Left));
}
