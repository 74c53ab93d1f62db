mod event_loop;
mod handlers;
mod rendering;

use std::cell::Cell;
use std::io::{self, Stdout};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::components::{GlobalRoot, SettingsDialog, Sidebar, UploadContainer};
use crate::config::{AppConfig, PaletteConfig};
use crate::error::{Result, SettingsError};
use crate::resolve::Fallbacks;
use crate::settings::{Settings, SettingsStore};
use crate::theme::ThemeBroadcast;
use crate::view::{derive_view, Environment, ViewState};

/// Raw mode plus alternate screen for as long as the value lives
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().map_err(|e| SettingsError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
            .map_err(|e| SettingsError::Terminal(e.to_string()))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| SettingsError::Terminal(e.to_string()))?;
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        let _ = self.terminal.show_cursor();
    }
}

pub struct App {
    store: SettingsStore,
    env: Environment,
    fallbacks: Fallbacks,
    theme: ThemeBroadcast,
    palettes: PaletteConfig,

    dialog: SettingsDialog,
    sidebar: Sidebar,
    global_root: GlobalRoot,
    upload: UploadContainer,

    /// Set by the store observer whenever settings change
    settings_changed: Rc<Cell<bool>>,

    should_quit: bool,
    needs_redraw: bool,
    tick_interval: Duration,
    last_tick: Instant,
}

impl App {
    pub fn new(
        mut store: SettingsStore,
        env: Environment,
        fallbacks: Fallbacks,
        theme: ThemeBroadcast,
        config: &AppConfig,
    ) -> Self {
        let settings_changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&settings_changed);
        store.subscribe(move |_| flag.set(true));

        tracing::info!(
            "Starting in {} mode ({})",
            theme.mode().as_str(),
            if env.is_hosted_deployment { "hosted" } else { "self-hosted" }
        );

        Self {
            store,
            env,
            fallbacks,
            theme,
            palettes: config.palette.clone(),
            dialog: SettingsDialog::new(),
            sidebar: Sidebar::new(),
            global_root: GlobalRoot::new(),
            upload: UploadContainer::new(),
            settings_changed,
            should_quit: false,
            needs_redraw: true,
            tick_interval: Duration::from_millis(config.general.tick_interval_ms.max(16)),
            last_tick: Instant::now(),
        }
    }

    pub fn settings(&self) -> &Settings {
        self.store.current()
    }

    pub fn view(&self) -> ViewState {
        derive_view(self.store.current(), &self.env)
    }

    pub fn theme(&self) -> &ThemeBroadcast {
        &self.theme
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_settings_open(&self) -> bool {
        self.dialog.is_visible()
    }

    fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Consume the change flag raised by the store observer
    fn take_settings_changed(&mut self) -> bool {
        self.settings_changed.replace(false)
    }
}
