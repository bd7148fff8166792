//! Rules screen: how the puzzle is played.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::instrument;

use crate::screen::{Screen, ScreenTransition};

const RULES: &str = "\
The Tower of Hanoi is a mathematical game or puzzle.

Rules:
1. Only one disk can be moved at a time.
2. Each move takes the upper disk from one of the stacks and places it on top of another stack.
3. No disk may be placed on top of a smaller disk.

Move the entire stack to the right peg, obeying the above rules!

Controls:
- Drag a top disk with the mouse and release it over another peg.
- Or press 1, 2, 3 to pick a peg, then again to choose where the disk goes.
- r restarts the puzzle, Esc returns to the menu.";

/// Static screen showing the tutorial.
#[derive(Debug, Default)]
pub struct RulesScreen;

impl RulesScreen {
    /// Creates the rules screen.
    pub fn new() -> Self {
        Self
    }
}

impl Screen for RulesScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Rules")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let body = Paragraph::new(RULES)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Tutorial"));
        frame.render_widget(body, chunks[1]);

        let help = Paragraph::new("Enter / Esc: Back | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b') => ScreenTransition::GoToMainMenu,
            _ => ScreenTransition::Stay,
        }
    }
}
