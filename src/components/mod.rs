pub mod regions;
pub mod settings_dialog;

use crossterm::event::Event;
use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::config::Palette;
use crate::resolve::ResolvedRequest;
use crate::settings::Settings;
use crate::theme::ThemeMode;
use crate::view::ViewState;

pub use regions::{GlobalRoot, Sidebar, UploadContainer};
pub use settings_dialog::SettingsDialog;

/// Everything a component may read while handling input or drawing.
///
/// The palette is the one chosen for the component's own region, so each
/// region receives the theme mode explicitly.
pub struct RenderContext<'a> {
    pub settings: &'a Settings,
    pub view: ViewState,
    pub palette: &'a Palette,
    pub mode: ThemeMode,
    pub resolution: Result<&'a ResolvedRequest, &'a str>,
    pub focused: bool,
}

pub trait Component {
    fn handle_event(&mut self, event: &Event, ctx: &RenderContext<'_>) -> Option<Action>;

    fn update(&mut self, action: &Action);

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>);
}
