// Rendering - frame layout and per-region palettes

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::App;
use crate::components::{Component, RenderContext};
use crate::error::{Result, SettingsError};
use crate::resolve::resolve;
use crate::theme::Region;
use crate::view::derive_view;

const SIDEBAR_WIDTH: u16 = 34;
const UPLOAD_HEIGHT: u16 = 6;

/// Screen areas for the mounted regions
struct RegionAreas {
    sidebar: Option<Rect>,
    global_root: Option<Rect>,
    upload: Option<Rect>,
}

impl App {
    pub(super) fn draw(&mut self, tui: &mut super::Tui) -> Result<()> {
        tui.terminal_mut()
            .draw(|frame| self.render_frame(frame))
            .map_err(|e| SettingsError::Terminal(e.to_string()))?;
        Ok(())
    }

    fn layout(&self, area: Rect) -> RegionAreas {
        let show_sidebar = self.theme.is_mounted(Region::Sidebar);
        let show_root = self.theme.is_mounted(Region::GlobalRoot);
        let show_upload = self.theme.is_mounted(Region::UploadContainer);

        let (sidebar, main) = if show_sidebar {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(area);
            (Some(chunks[0]), chunks[1])
        } else {
            (None, area)
        };

        let (global_root, upload) = match (show_root, show_upload) {
            (true, true) => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(UPLOAD_HEIGHT)])
                    .split(main);
                (Some(chunks[0]), Some(chunks[1]))
            }
            (true, false) => (Some(main), None),
            (false, true) => (None, Some(main)),
            (false, false) => (None, None),
        };

        RegionAreas {
            sidebar,
            global_root,
            upload,
        }
    }

    /// Draw every mounted region with its own mode, then the dialog on top
    pub(super) fn render_frame(&self, frame: &mut Frame) {
        let settings = self.store.current();
        let view = derive_view(settings, &self.env);
        let resolved = resolve(settings, &self.env, &self.fallbacks).map_err(|e| e.to_string());
        let resolution = resolved.as_ref().map_err(String::as_str);
        let areas = self.layout(frame.area());
        let dialog_open = self.dialog.is_visible();

        let regions: [(Region, Option<Rect>, &dyn Component); 3] = [
            (Region::Sidebar, areas.sidebar, &self.sidebar),
            (Region::GlobalRoot, areas.global_root, &self.global_root),
            (Region::UploadContainer, areas.upload, &self.upload),
        ];

        for (region, area, component) in regions {
            let (Some(area), Some(mode)) = (area, self.theme.mode_for(region)) else {
                continue;
            };
            let palette = self.palettes.for_mode(mode);
            let ctx = RenderContext {
                settings,
                view,
                palette: &palette,
                mode,
                resolution,
                focused: !dialog_open && region == Region::GlobalRoot,
            };
            component.render(frame, area, &ctx);
        }

        if dialog_open {
            let mode = self.theme.mode();
            let palette = self.palettes.for_mode(mode);
            let ctx = RenderContext {
                settings,
                view,
                palette: &palette,
                mode,
                resolution,
                focused: true,
            };
            self.dialog.render(frame, frame.area(), &ctx);
        }
    }
}
