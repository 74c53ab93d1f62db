// Input routing and action dispatch

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;
use crate::action::Action;
use crate::components::{Component, RenderContext};
use crate::error::Result;
use crate::theme::Region;
use crate::view::{derive_view, select_model};

impl App {
    /// Turn a terminal event into an action. The dialog, when open, sees
    /// every event first.
    pub fn handle_event(&mut self, event: Event) -> Option<Action> {
        if self.dialog.is_visible() {
            let palette = self.palettes.for_mode(self.theme.mode());
            let settings = self.store.current();
            let ctx = RenderContext {
                settings,
                view: derive_view(settings, &self.env),
                palette: &palette,
                mode: self.theme.mode(),
                resolution: Err(""),
                focused: true,
            };
            return self.dialog.handle_event(&event, &ctx);
        }

        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(key),
            Event::Resize(_, _) => Some(Action::Render),
            _ => None,
        }
    }

    fn handle_key(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('s') | KeyCode::Char(',') => Some(Action::SettingsOpen),
            KeyCode::Char('d') => Some(Action::ToggleDarkMode),
            KeyCode::Char('u') => Some(Action::ToggleRegion(Region::UploadContainer)),
            KeyCode::Char('b') => Some(Action::ToggleRegion(Region::Sidebar)),
            _ => None,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match &action {
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            Action::Tick => {}
            Action::Render => self.mark_dirty(),

            Action::SettingsApply(patch) => {
                self.store.update(patch.clone());
            }
            Action::SelectModel(model) => {
                let view = select_model(&mut self.store, *model, &self.env);
                tracing::debug!(
                    "Model {} selected, credential row: {}",
                    model.id(),
                    view.active_credential_field.as_str()
                );
            }
            Action::SettingsOpen
            | Action::SettingsClose
            | Action::SettingsNextItem
            | Action::SettingsPrevItem
            | Action::SettingsStartEdit
            | Action::SettingsCancelEdit => self.dialog.update(&action),

            Action::ToggleDarkMode => self.theme.toggle(),
            Action::SetDarkMode(dark) => self.theme.apply_theme_mode(*dark),
            Action::ToggleRegion(region) => {
                let region = *region;
                if self.theme.is_mounted(region) {
                    self.theme.unmount(region);
                } else {
                    self.theme.mount(region);
                }
                tracing::debug!(
                    "Region {} mounted: {}",
                    region.as_str(),
                    self.theme.is_mounted(region)
                );
            }
        }

        self.sidebar.update(&action);
        self.global_root.update(&action);
        self.upload.update(&action);
        self.mark_dirty();
        Ok(())
    }
}
