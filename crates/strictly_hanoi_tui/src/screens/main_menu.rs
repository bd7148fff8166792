//! Main menu screen, the hub between games.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::settings::Settings;

/// Menu options available on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum MenuOption {
    /// Start a puzzle with the current settings.
    NewGame,
    /// Change the disk count.
    Settings,
    /// Read how to play.
    Rules,
    /// Leave the application.
    Exit,
}

impl MenuOption {
    /// Text shown in the menu list.
    pub fn label(self) -> &'static str {
        match self {
            Self::NewGame => "New Game",
            Self::Settings => "Settings",
            Self::Rules => "Rules",
            Self::Exit => "Exit",
        }
    }

    fn transition(self) -> ScreenTransition {
        match self {
            Self::NewGame => ScreenTransition::NewGame,
            Self::Settings => ScreenTransition::GoToSettings,
            Self::Rules => ScreenTransition::GoToRules,
            Self::Exit => ScreenTransition::Quit,
        }
    }
}

/// State for the main menu screen.
#[derive(Debug, Getters)]
pub struct MainMenuScreen {
    settings: Settings,
    #[getter(skip)]
    list_state: ListState,
}

impl MainMenuScreen {
    /// Creates a main menu showing the given settings.
    #[instrument]
    pub fn new(settings: Settings) -> Self {
        debug!("Initializing MainMenuScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            settings,
            list_state,
        }
    }

    fn select_previous(&mut self) {
        let count = MenuOption::iter().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = MenuOption::iter().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Returns the currently highlighted option.
    pub fn selected_option(&self) -> MenuOption {
        let idx = self.list_state.selected().unwrap_or(0);
        MenuOption::iter()
            .nth(idx)
            .unwrap_or(MenuOption::NewGame)
    }
}

impl Screen for MainMenuScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Tower of Hanoi")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let disks = self.settings.disks();
        let summary = Paragraph::new(format!(
            "Disks: {}   Best possible: {} moves",
            disks,
            disks.minimum_moves()
        ))
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(summary, chunks[1]);

        let items: Vec<ListItem> = MenuOption::iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, chunks[2], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = ?option, "Menu option selected");
                option.transition()
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
