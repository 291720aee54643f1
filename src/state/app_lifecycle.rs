//! Application lifecycle management.
//!
//! - `new()` - creates the app and mounts the root screen
//! - `run()` - main event loop

use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Instant;
use tokio::sync::mpsc;

use crate::constants::TICK_RATE;
use crate::locale::Localizer;
use crate::store::KeyValueStore;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, NavigationState, Route, UiState};

impl App {
    /// Creates the app and mounts `root` as the first screen.
    ///
    /// Must be called inside a tokio runtime: mounting spawns the screen's
    /// store lookups.
    #[must_use]
    pub fn new(root: Route, store: Arc<dyn KeyValueStore>, config: AppConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            nav: NavigationState::new(),
            ui: UiState::new(config.privacy_mode),
            locale: Localizer::new(config.language),
            theme: config.theme,
            config,
            exit: false,
            persist_config: false,
            message_tx,
            message_rx,
            store,
        };
        app.navigate(root);
        app
    }

    /// Writes preference changes (privacy mode) back to the config file.
    #[must_use]
    pub fn with_config_persistence(mut self) -> Self {
        self.persist_config = true;
        self
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_messages();
            self.process_focus_events();

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key).await?;
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }
}
