//! Screen trait and transition type for the menu state machine.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] and
/// [`Screen::handle_mouse`] to drive the [`HanoiApp`](crate::HanoiApp).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Navigate to the main menu.
    GoToMainMenu,
    /// Navigate to the settings screen.
    GoToSettings,
    /// Navigate to the rules screen.
    GoToRules,
    /// Start a new game with the current settings.
    NewGame,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the menu state machine.
///
/// Each screen owns its own state, renders its UI, and handles input.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;

    /// Handles a mouse event. Most screens are keyboard-only.
    fn handle_mouse(&mut self, _mouse: MouseEvent) -> ScreenTransition {
        ScreenTransition::Stay
    }

    /// Called with the full terminal area before each render.
    fn on_resize(&mut self, _area: Rect) {}
}
