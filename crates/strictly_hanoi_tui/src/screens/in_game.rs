//! In-game screen: the board, mouse drag-and-drop, and the win banner.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_hanoi::{
    BoardLayout, DiskCount, DropOutcome, InteractionController, Peg, PuzzleEngine, RollbackReason,
};
use tracing::{debug, info, instrument};

use crate::board::{cell_to_point, draw_board, fit_layout};
use crate::screen::{Screen, ScreenTransition};

const HELP: &str = "Mouse: drag disks | 1/2/3: pick pegs | r: Reset | Esc: Menu | q: Quit";

/// Title, board, and status bar areas for a terminal of size `area`.
fn split(area: Rect, disk_count: DiskCount) -> (Rect, Rect, Rect) {
    let board_rows = u16::from(disk_count.get()) + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(board_rows),
            Constraint::Length(4),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

fn board_block() -> Block<'static> {
    Block::default().borders(Borders::ALL).title("Board")
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// State for a puzzle in progress.
#[derive(Debug)]
pub struct InGameScreen {
    controller: InteractionController,
    message: String,
}

impl InGameScreen {
    /// Starts a fresh puzzle with `disk_count` disks.
    #[instrument]
    pub fn new(disk_count: DiskCount) -> Self {
        info!("Starting game");
        Self {
            controller: InteractionController::new(
                PuzzleEngine::initialize(disk_count),
                BoardLayout::default(),
            ),
            message: String::new(),
        }
    }

    /// The controller driving the puzzle.
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Latest feedback shown next to the move counter.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn is_won(&self) -> bool {
        self.controller.engine().is_solved()
    }

    /// Turns the result of a gesture into feedback for the player.
    fn report(&mut self, outcome: DropOutcome) {
        self.message = match outcome {
            DropOutcome::NoGesture => return,
            DropOutcome::Selected(peg) => {
                format!("{} peg selected, choose where it goes", peg)
            }
            DropOutcome::Moved { mov, outcome } => {
                if outcome.solved {
                    info!(moves = outcome.move_count, "Puzzle solved");
                }
                format!("Moved {}", mov)
            }
            DropOutcome::RolledBack { origin, reason } => match reason {
                RollbackReason::OutsideCaptureZone => {
                    format!("Not over a peg, disk returned to {}", origin)
                }
                RollbackReason::Illegal(error) => {
                    format!("{}, disk returned to {}", error, origin)
                }
                RollbackReason::Cancelled => format!("Disk returned to {}", origin),
            },
        };
    }

    fn render_win_banner(&self, frame: &mut Frame, board: Rect) {
        let engine = self.controller.engine();
        let lines = vec![
            Line::from("You Won!").style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(format!(
                "Completed the game in {} moves!",
                engine.move_count()
            )),
            Line::from(format!("Best possible: {} moves", engine.minimum_moves())),
            Line::from(""),
            Line::from("r: Play again | Esc: Menu").style(Style::default().fg(Color::DarkGray)),
        ];

        let popup = centered(board, 40, lines.len() as u16 + 2);
        let banner = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(Clear, popup);
        frame.render_widget(banner, popup);
    }
}

impl Screen for InGameScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let engine = self.controller.engine();
        let (title_area, board_area, status_area) = split(frame.area(), engine.disk_count());

        let title = Paragraph::new(format!("Tower of Hanoi - {} disks", engine.disk_count()))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, title_area);

        let block = board_block();
        let inner = block.inner(board_area);
        frame.render_widget(block, board_area);
        draw_board(frame.buffer_mut(), inner, &self.controller);

        let status = Paragraph::new(vec![
            Line::from(format!("Moves: {}   {}", engine.move_count(), self.message)),
            Line::from(HELP).style(Style::default().fg(Color::DarkGray)),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, status_area);

        if self.is_won() {
            self.render_win_banner(frame, board_area);
        }
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            KeyCode::Char('b') => ScreenTransition::GoToMainMenu,
            KeyCode::Esc => {
                if self.controller.active_peg().is_some() {
                    let outcome = self.controller.cancel();
                    self.report(outcome);
                    ScreenTransition::Stay
                } else {
                    ScreenTransition::GoToMainMenu
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.reset();
                self.message = "Puzzle reset".to_string();
                ScreenTransition::Stay
            }
            KeyCode::Enter if self.is_won() => ScreenTransition::GoToMainMenu,
            KeyCode::Char(c) if !self.is_won() => {
                let peg = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Peg::from_index);
                if let Some(peg) = peg {
                    let outcome = self.controller.select_peg(peg);
                    self.report(outcome);
                }
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> ScreenTransition {
        if self.is_won() {
            return ScreenTransition::Stay;
        }

        let point = cell_to_point(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.controller.pointer_down(point) {
                    debug!(?point, "Drag started");
                    self.message.clear();
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => self.controller.pointer_move(point),
            MouseEventKind::Up(MouseButton::Left) => {
                let outcome = self.controller.pointer_up(point);
                self.report(outcome);
            }
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn on_resize(&mut self, area: Rect) {
        let disk_count = self.controller.engine().disk_count();
        let (_, board_area, _) = split(area, disk_count);
        let inner = board_block().inner(board_area);
        self.controller.set_layout(fit_layout(inner, disk_count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    const WIDTH: u16 = 60;
    const HEIGHT: u16 = 20;

    fn screen(n: u8) -> InGameScreen {
        let mut screen = InGameScreen::new(DiskCount::new(n).unwrap());
        screen.on_resize(Rect::new(0, 0, WIDTH, HEIGHT));
        screen
    }

    fn press(screen: &mut InGameScreen, c: char) -> ScreenTransition {
        screen.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn mouse(screen: &mut InGameScreen, kind: MouseEventKind, column: u16, row: u16) {
        screen.handle_mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// Terminal cell at the middle of the top disk of `peg`.
    fn top_disk_cell(screen: &InGameScreen, peg: Peg) -> (u16, u16) {
        let layout = screen.controller().layout();
        let bounds = layout
            .top_disk_bounds(peg, screen.controller().engine().peg(peg))
            .unwrap();
        (
            ((bounds.x + bounds.width / 2) / 2) as u16,
            ((bounds.y + bounds.height / 2) / 2) as u16,
        )
    }

    fn peg_column(screen: &InGameScreen, peg: Peg) -> u16 {
        (screen.controller().layout().peg_center_x(peg) / 2) as u16
    }

    fn rendered_text(screen: &InGameScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_mouse_drag_moves_disk() {
        let mut screen = screen(3);
        let (col, row) = top_disk_cell(&screen, Peg::Left);
        let dest = peg_column(&screen, Peg::Right);

        mouse(&mut screen, MouseEventKind::Down(MouseButton::Left), col, row);
        mouse(&mut screen, MouseEventKind::Drag(MouseButton::Left), dest, 2);
        assert!(screen.controller().dragged_disk_bounds().is_some());
        mouse(&mut screen, MouseEventKind::Up(MouseButton::Left), dest, 2);

        let engine = screen.controller().engine();
        assert_eq!(engine.move_count(), 1);
        assert_eq!(engine.peg(Peg::Right).size(), 1);
    }

    #[test]
    fn test_illegal_drop_reports_rollback() {
        let mut screen = screen(3);
        press(&mut screen, '1');
        press(&mut screen, '2');

        let (col, row) = top_disk_cell(&screen, Peg::Left);
        let dest = peg_column(&screen, Peg::Middle);
        mouse(&mut screen, MouseEventKind::Down(MouseButton::Left), col, row);
        mouse(&mut screen, MouseEventKind::Up(MouseButton::Left), dest, row);

        assert_eq!(screen.controller().engine().move_count(), 1);
        assert!(screen.message().contains("returned to Left"));
    }

    #[test]
    fn test_escape_cancels_selection_before_leaving() {
        let mut screen = screen(3);
        press(&mut screen, '1');
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);

        assert_eq!(screen.handle_key(esc), ScreenTransition::Stay);
        assert_eq!(screen.controller().active_peg(), None);
        assert_eq!(screen.handle_key(esc), ScreenTransition::GoToMainMenu);
    }

    #[test]
    fn test_render_shows_counter() {
        let mut screen = screen(3);
        assert!(rendered_text(&screen).contains("Moves: 0"));

        press(&mut screen, '1');
        press(&mut screen, '3');
        assert!(rendered_text(&screen).contains("Moves: 1"));
    }

    #[test]
    fn test_win_banner_after_solving() {
        let mut screen = screen(3);
        for mov in strictly_hanoi::solve(DiskCount::default()) {
            let origin = char::from(b'1' + mov.origin().index() as u8);
            let dest = char::from(b'1' + mov.dest().index() as u8);
            press(&mut screen, origin);
            press(&mut screen, dest);
        }

        let text = rendered_text(&screen);
        assert!(text.contains("You Won!"));
        assert!(text.contains("Completed the game in 7 moves!"));

        // Moves are locked until the player restarts.
        press(&mut screen, '3');
        assert_eq!(screen.controller().active_peg(), None);
        press(&mut screen, 'r');
        assert_eq!(screen.controller().engine().move_count(), 0);
    }
}
