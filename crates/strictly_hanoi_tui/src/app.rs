//! Application state machine driving the multi-screen TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use derive_getters::Getters;
use derive_new::new;
use ratatui::{Terminal, backend::Backend, layout::Rect};
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::screens::{InGameScreen, MainMenuScreen, RulesScreen, SettingsScreen};
use crate::settings::Settings;

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    MainMenu(MainMenuScreen),
    Settings(SettingsScreen),
    Rules(RulesScreen),
    InGame(InGameScreen),
}

impl ActiveScreen {
    fn screen(&self) -> &dyn Screen {
        match self {
            Self::MainMenu(s) => s,
            Self::Settings(s) => s,
            Self::Rules(s) => s,
            Self::InGame(s) => s,
        }
    }

    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::MainMenu(s) => s,
            Self::Settings(s) => s,
            Self::Rules(s) => s,
            Self::InGame(s) => s,
        }
    }
}

/// Top-level application: owns the settings and switches between screens.
///
/// Call [`HanoiApp::run`] to start the event loop.
#[derive(Debug, Getters, new)]
pub struct HanoiApp {
    settings: Settings,
}

impl HanoiApp {
    /// Runs the event loop until the player quits.
    ///
    /// The caller sets up and restores the terminal.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!(disks = %self.settings.disks(), "Starting event loop");
        let mut screen = ActiveScreen::MainMenu(MainMenuScreen::new(self.settings));

        loop {
            let size = terminal.size()?;
            screen
                .screen_mut()
                .on_resize(Rect::new(0, 0, size.width, size.height));
            terminal.draw(|f| screen.screen().render(f))?;

            // Short timeout keeps the loop responsive to resizes.
            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            let transition = Self::dispatch(&mut screen, event::read()?);

            screen = match self.apply_transition(transition, screen) {
                Some(next) => next,
                None => {
                    info!("Quitting");
                    return Ok(());
                }
            };
        }
    }

    /// Routes one terminal event to the active screen.
    fn dispatch(screen: &mut ActiveScreen, event: Event) -> ScreenTransition {
        match event {
            // crossterm fires both press and release on some platforms.
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                screen.screen_mut().handle_key(key)
            }
            Event::Mouse(mouse) => screen.screen_mut().handle_mouse(mouse),
            _ => ScreenTransition::Stay,
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::GoToMainMenu => {
                if let ActiveScreen::Settings(settings_screen) = &current
                    && let Some(updated) = settings_screen.applied()
                {
                    debug!(disks = %updated.disks(), "Saving updated settings");
                    self.settings = updated;
                }
                Some(ActiveScreen::MainMenu(MainMenuScreen::new(self.settings)))
            }

            ScreenTransition::GoToSettings => {
                Some(ActiveScreen::Settings(SettingsScreen::new(self.settings)))
            }

            ScreenTransition::GoToRules => Some(ActiveScreen::Rules(RulesScreen::new())),

            ScreenTransition::NewGame => {
                info!(disks = %self.settings.disks(), "Navigating to game");
                Some(ActiveScreen::InGame(InGameScreen::new(*self.settings.disks())))
            }

            ScreenTransition::Quit => None,
        }
    }
}
