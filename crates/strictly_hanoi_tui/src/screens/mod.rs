//! Screen implementations for the menu state machine.

mod in_game;
mod main_menu;
mod rules;
mod settings;

pub use in_game::InGameScreen;
pub use main_menu::{MainMenuScreen, MenuOption};
pub use rules::RulesScreen;
pub use settings::SettingsScreen;
