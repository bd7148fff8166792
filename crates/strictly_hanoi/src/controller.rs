//! Pointer-gesture state machine sitting on top of the engine.
//!
//! The controller turns pointer-down / move / up into move attempts. It never
//! surfaces an engine error: an illegal or off-target drop is a rollback,
//! which only means the disk is drawn back on its origin peg.

use crate::action::{Move, MoveOutcome};
use crate::engine::PuzzleEngine;
use crate::error::IllegalMoveError;
use crate::layout::{BoardLayout, Point, Rect};
use crate::types::{Disk, DiskCount, Peg};
use derive_getters::Getters;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// A disk picked up from a peg and following the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Drag {
    /// Disk being dragged.
    disk: Disk,
    /// Peg it was lifted from.
    origin: Peg,
    /// Pointer position relative to the disk's top-left corner when grabbed.
    grab_offset: Point,
    /// Latest pointer position.
    pointer: Point,
}

/// Ephemeral interaction state. Not part of the puzzle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No disk is being manipulated.
    #[default]
    Idle,
    /// A disk follows the pointer.
    Dragging(Drag),
    /// A peg was chosen with the keyboard; the next choice is the destination.
    Selected(Peg),
}

/// Why a gesture ended without moving a disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackReason {
    /// The drop landed in no peg's capture zone, or in more than one.
    OutsideCaptureZone,
    /// The engine refused the move.
    Illegal(IllegalMoveError),
    /// The gesture was abandoned.
    Cancelled,
}

/// Result of finishing a gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// There was no gesture in progress to finish.
    NoGesture,
    /// A peg was selected and awaits a destination.
    Selected(Peg),
    /// The disk moved.
    Moved {
        /// The applied move.
        mov: Move,
        /// Counter and solved flag after the move.
        outcome: MoveOutcome,
    },
    /// Nothing changed; the disk goes back to its origin peg.
    RolledBack {
        /// Peg the disk returns to.
        origin: Peg,
        /// Why the move did not happen.
        reason: RollbackReason,
    },
}

impl DropOutcome {
    /// Returns true if a disk moved.
    pub fn is_move(&self) -> bool {
        matches!(self, DropOutcome::Moved { .. })
    }
}

/// Owns the engine and translates pointer and key input into moves.
#[derive(Debug, Clone)]
pub struct InteractionController {
    engine: PuzzleEngine,
    layout: BoardLayout,
    state: DragState,
}

impl InteractionController {
    /// Creates a controller in the idle state.
    #[instrument(skip(engine), fields(disk_count = %engine.disk_count()))]
    pub fn new(engine: PuzzleEngine, layout: BoardLayout) -> Self {
        Self {
            engine,
            layout,
            state: DragState::Idle,
        }
    }

    /// The puzzle being played.
    pub fn engine(&self) -> &PuzzleEngine {
        &self.engine
    }

    /// Geometry used for hit-testing.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Current interaction state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Replaces the geometry, e.g. after the view is resized.
    ///
    /// A drag in progress is abandoned since its offsets no longer apply.
    pub fn set_layout(&mut self, layout: BoardLayout) {
        if layout != self.layout {
            self.state = DragState::Idle;
            self.layout = layout;
        }
    }

    /// Resets the puzzle and discards any gesture in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
        self.engine.reset();
    }

    /// Starts over with a new disk count.
    #[instrument(skip(self))]
    pub fn restart(&mut self, disk_count: DiskCount) {
        info!("Starting new puzzle");
        self.state = DragState::Idle;
        self.engine = PuzzleEngine::initialize(disk_count);
    }

    /// Finds the single top disk whose bounds contain `point`.
    fn hit_test(&self, point: Point) -> Option<(Peg, Disk, Rect)> {
        let mut hits = Peg::iter().filter_map(|peg| {
            let stack = self.engine.peg(peg);
            let bounds = self.layout.top_disk_bounds(peg, stack)?;
            let disk = stack.peek_top()?;
            bounds.contains(point).then_some((peg, disk, bounds))
        });

        match (hits.next(), hits.next()) {
            (Some(hit), None) => Some(hit),
            _ => None,
        }
    }

    /// Picks up the top disk under the pointer, if there is exactly one.
    ///
    /// Returns true if a drag started. Ignored while already dragging. A miss
    /// leaves a keyboard selection in place; a hit replaces it.
    #[instrument(skip(self))]
    pub fn pointer_down(&mut self, point: Point) -> bool {
        if matches!(self.state, DragState::Dragging(_)) {
            return false;
        }

        match self.hit_test(point) {
            Some((origin, disk, bounds)) => {
                debug!(%origin, %disk, "Disk grabbed");
                self.state = DragState::Dragging(Drag {
                    disk,
                    origin,
                    grab_offset: point - bounds.top_left(),
                    pointer: point,
                });
                true
            }
            None => false,
        }
    }

    /// Tracks the pointer while dragging. Never touches the engine.
    pub fn pointer_move(&mut self, point: Point) {
        if let DragState::Dragging(drag) = &mut self.state {
            drag.pointer = point;
        }
    }

    /// Drops the dragged disk on the peg whose capture zone holds the pointer.
    ///
    /// Ends a drag in the idle state. Without a drag nothing changes.
    #[instrument(skip(self))]
    pub fn pointer_up(&mut self, point: Point) -> DropOutcome {
        let DragState::Dragging(drag) = self.state else {
            return DropOutcome::NoGesture;
        };
        self.state = DragState::Idle;

        match self.layout.capture_peg(point.x) {
            Some(dest) => self.attempt(drag.origin, dest),
            None => {
                debug!(origin = %drag.origin, x = point.x, "Dropped outside capture zones");
                DropOutcome::RolledBack {
                    origin: drag.origin,
                    reason: RollbackReason::OutsideCaptureZone,
                }
            }
        }
    }

    /// Abandons the current gesture.
    pub fn cancel(&mut self) -> DropOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(Drag { origin, .. }) | DragState::Selected(origin) => {
                DropOutcome::RolledBack {
                    origin,
                    reason: RollbackReason::Cancelled,
                }
            }
            DragState::Idle => DropOutcome::NoGesture,
        }
    }

    /// Keyboard play: the first call selects an origin, the second moves to `peg`.
    ///
    /// Selecting an empty peg does nothing. Choosing the selected peg again
    /// is reported as an illegal move, like dropping a disk back where it was.
    #[instrument(skip(self))]
    pub fn select_peg(&mut self, peg: Peg) -> DropOutcome {
        match self.state {
            DragState::Selected(origin) => {
                self.state = DragState::Idle;
                self.attempt(origin, peg)
            }
            DragState::Idle | DragState::Dragging(_) => {
                if self.engine.peg(peg).is_empty() {
                    self.state = DragState::Idle;
                    DropOutcome::NoGesture
                } else {
                    self.state = DragState::Selected(peg);
                    DropOutcome::Selected(peg)
                }
            }
        }
    }

    /// Where the dragged disk should be drawn, if one is being dragged.
    pub fn dragged_disk_bounds(&self) -> Option<Rect> {
        match self.state {
            DragState::Dragging(drag) => {
                let top_left = drag.pointer - drag.grab_offset;
                Some(Rect::new(
                    top_left.x,
                    top_left.y,
                    self.layout.disk_width(drag.disk),
                    *self.layout.disk_height(),
                ))
            }
            _ => None,
        }
    }

    /// Peg whose top disk is lifted or selected, if any.
    pub fn active_peg(&self) -> Option<Peg> {
        match self.state {
            DragState::Dragging(drag) => Some(drag.origin),
            DragState::Selected(peg) => Some(peg),
            DragState::Idle => None,
        }
    }

    fn attempt(&mut self, origin: Peg, dest: Peg) -> DropOutcome {
        let mov = Move::new(origin, dest);
        match self.engine.apply_move(origin, dest) {
            Ok(outcome) => DropOutcome::Moved { mov, outcome },
            Err(error) => {
                debug!(%mov, %error, "Rolling back");
                DropOutcome::RolledBack {
                    origin,
                    reason: RollbackReason::Illegal(error),
                }
            }
        }
    }
}
