//! Settings screen: choose how many disks new games use.
//!
//! The count is typed in and validated as a whole. Invalid input is rejected
//! with a message and the player is asked again; nothing is clamped.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_hanoi::DiskCount;
use tracing::{debug, info, instrument, warn};

use crate::screen::{Screen, ScreenTransition};
use crate::settings::Settings;

/// Longest input accepted.
const MAX_INPUT_LEN: usize = 2;

/// State for the settings screen.
#[derive(Debug)]
pub struct SettingsScreen {
    current: Settings,
    input: String,
    /// The input still shows the current count; the next keystroke replaces it.
    prefilled: bool,
    error: Option<String>,
    applied: Option<Settings>,
}

impl SettingsScreen {
    /// Creates a settings screen pre-filled with the current disk count.
    #[instrument]
    pub fn new(current: Settings) -> Self {
        debug!("Initializing SettingsScreen");
        Self {
            current,
            input: current.disks().to_string(),
            prefilled: true,
            error: None,
            applied: None,
        }
    }

    /// Settings confirmed by the player, if any.
    ///
    /// Read by the app when leaving the screen.
    pub fn applied(&self) -> Option<Settings> {
        self.applied
    }

    /// Text typed so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Message for the last rejected input.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validates the input and applies it, or records why it was rejected.
    #[instrument(skip(self), fields(input = %self.input))]
    fn submit(&mut self) -> ScreenTransition {
        match self.input.parse::<DiskCount>() {
            Ok(disks) => {
                info!(%disks, "Disk count applied");
                let settings = self.current.with_disks(disks);
                self.current = settings;
                self.applied = Some(settings);
                self.error = None;
                ScreenTransition::GoToMainMenu
            }
            Err(e) => {
                warn!(error = %e, "Rejected disk count");
                self.error = Some(e.to_string());
                self.input.clear();
                ScreenTransition::Stay
            }
        }
    }

    /// Steps the typed count up or down, staying in range.
    fn step(&mut self, up: bool) {
        let base = self
            .input
            .parse::<DiskCount>()
            .unwrap_or(*self.current.disks())
            .get();
        let next = if up { base.saturating_add(1) } else { base.saturating_sub(1) };
        if let Ok(disks) = DiskCount::new(next) {
            self.input = disks.to_string();
            self.prefilled = true;
            self.error = None;
        }
    }
}

impl Screen for SettingsScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Settings")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let prompt = Paragraph::new(format!("{}_", self.input))
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Number of disks ({}-{})", DiskCount::MIN, DiskCount::MAX)),
            );
        frame.render_widget(prompt, chunks[1]);

        if let Some(error) = &self.error {
            let message = Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Error"));
            frame.render_widget(message, chunks[2]);
        }

        let help = Paragraph::new("0-9: Type | ↑↓: Adjust | Enter: Apply | Esc: Back")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            // Non-digits are kept too so the rejection message can name them.
            KeyCode::Char(c) if c != 'q' && !c.is_control() => {
                if std::mem::take(&mut self.prefilled) {
                    self.input.clear();
                }
                if self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.prefilled = false;
                self.input.pop();
                ScreenTransition::Stay
            }
            KeyCode::Up => {
                self.step(true);
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.step(false);
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc | KeyCode::Char('q') => {
                info!("Leaving settings screen");
                ScreenTransition::GoToMainMenu
            }
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(screen: &mut SettingsScreen, code: KeyCode) -> ScreenTransition {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(screen: &mut SettingsScreen, text: &str) {
        while !screen.input().is_empty() {
            press(screen, KeyCode::Backspace);
        }
        for c in text.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_prefilled_with_current() {
        let screen = SettingsScreen::new(Settings::default());
        assert_eq!(screen.input(), "3");
        assert_eq!(screen.applied(), None);
    }

    #[test]
    fn test_typing_replaces_prefilled_count() {
        let mut screen = SettingsScreen::new(Settings::default());
        press(&mut screen, KeyCode::Char('5'));
        assert_eq!(screen.input(), "5");
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::GoToMainMenu);
        assert_eq!(screen.applied().map(|s| s.disks().get()), Some(5));
    }

    #[test]
    fn test_typing_after_arrows_replaces_value() {
        let mut screen = SettingsScreen::new(Settings::default());
        press(&mut screen, KeyCode::Up);
        press(&mut screen, KeyCode::Char('7'));
        assert_eq!(screen.input(), "7");
    }

    #[test]
    fn test_valid_input_applies() {
        let mut screen = SettingsScreen::new(Settings::default());
        type_text(&mut screen, "6");
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::GoToMainMenu);
        assert_eq!(screen.applied().map(|s| s.disks().get()), Some(6));
    }

    #[test]
    fn test_out_of_range_reprompts() {
        let mut screen = SettingsScreen::new(Settings::default());
        type_text(&mut screen, "12");
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::Stay);
        assert!(screen.error().is_some_and(|e| e.contains("3 to 8")));
        assert_eq!(screen.input(), "");
        assert_eq!(screen.applied(), None);
    }

    #[test]
    fn test_non_number_reprompts() {
        let mut screen = SettingsScreen::new(Settings::default());
        type_text(&mut screen, "x");
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::Stay);
        assert!(screen.error().is_some_and(|e| e.contains("valid number")));

        type_text(&mut screen, "4");
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::GoToMainMenu);
        assert_eq!(screen.error(), None);
    }

    #[test]
    fn test_arrows_stay_in_range() {
        let mut screen = SettingsScreen::new(Settings::default());
        press(&mut screen, KeyCode::Down);
        assert_eq!(screen.input(), "3");
        for _ in 0..10 {
            press(&mut screen, KeyCode::Up);
        }
        assert_eq!(screen.input(), "8");
    }

    #[test]
    fn test_escape_discards() {
        let mut screen = SettingsScreen::new(Settings::default());
        type_text(&mut screen, "7");
        assert_eq!(press(&mut screen, KeyCode::Esc), ScreenTransition::GoToMainMenu);
        assert_eq!(screen.applied(), None);
    }
}
