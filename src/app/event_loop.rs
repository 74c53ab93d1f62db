// Event loop - main run() method

use std::time::Instant;

use crossterm::event;

use super::{App, Tui};
use crate::action::Action;
use crate::error::{Result, SettingsError};

impl App {
    pub fn run(&mut self) -> Result<()> {
        let mut tui = Tui::enter()?;

        loop {
            // ---- 1. Tick and store notifications ----

            if self.last_tick.elapsed() >= self.tick_interval {
                self.dispatch(Action::Tick)?;
                self.last_tick = Instant::now();
            }

            if self.take_settings_changed() {
                self.mark_dirty();
            }

            if self.should_quit {
                break;
            }

            // ---- 2. Draw once if anything changed ----

            if self.needs_redraw {
                self.draw(&mut tui)?;
                self.needs_redraw = false;
            }

            // ---- 3. Wait for input until the next tick ----

            let timeout = self.tick_interval.saturating_sub(self.last_tick.elapsed());
            if event::poll(timeout).map_err(|e| SettingsError::Terminal(e.to_string()))? {
                let event = event::read().map_err(|e| SettingsError::Terminal(e.to_string()))?;
                self.mark_dirty();

                if let Some(action) = self.handle_event(event) {
                    self.dispatch(action)?;
                }
            }

            if self.should_quit {
                break;
            }
        }

        tracing::info!("Event loop finished");
        Ok(())
    }
}
