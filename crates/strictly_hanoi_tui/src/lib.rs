//! Strictly Hanoi TUI - play the Tower of Hanoi in a terminal.
//!
//! # Architecture
//!
//! - **HanoiApp**: event loop and screen state machine
//! - **Screens**: main menu, settings, rules, and the in-game board
//! - **Board**: maps terminal cells to board geometry and draws pegs and disks
//! - **Settings**: TOML-backed player preferences
//! - **Cli**: `play` and `solve` subcommands
//!
//! All puzzle rules live in [`strictly_hanoi`]; this crate only turns
//! terminal input into calls on its controller.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app;
mod board;
mod cli;
mod report;
mod screen;
pub mod screens;
mod settings;

// Crate-level exports - Application
pub use app::HanoiApp;
pub use screen::{Screen, ScreenTransition};

// Crate-level exports - Board rendering
pub use board::{cell_to_point, draw_board, fit_layout};

// Crate-level exports - Configuration
pub use cli::{Cli, Command, DEFAULT_CONFIG_PATH, DEFAULT_LOG_PATH};
pub use settings::{Settings, SettingsError};

// Crate-level exports - Solver output
pub use report::SolveReport;
