//! The three themed regions of the main screen
//!
//! None of them nest inside another. Each one is drawn with the palette for
//! the mode `ThemeBroadcast` last pushed to it; an unmounted region is simply
//! not drawn by the caller.

use crossterm::event::Event;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::action::Action;
use crate::components::{Component, RenderContext};
use crate::config::Palette;
use crate::settings::SettingsField;
use crate::theme::Region;

fn region_block<'a>(title: &'a str, palette: &Palette, focused: bool) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(palette.title_style(focused))
        .borders(Borders::ALL)
        .border_style(palette.border_style(focused))
        .style(palette.base_style())
}

fn status_span(configured: bool, palette: &Palette) -> Span<'static> {
    if configured {
        Span::styled("✓ set", Style::default().fg(palette.success.to_color()))
    } else {
        Span::styled("✗ not set", Style::default().fg(palette.warning.to_color()))
    }
}

/// Summary of the current settings
#[derive(Debug, Default)]
pub struct Sidebar;

impl Sidebar {
    pub fn new() -> Self {
        Self
    }

    fn lines(ctx: &RenderContext<'_>) -> Vec<Line<'static>> {
        let palette = ctx.palette;
        let label = palette.muted_style();
        let value = Style::default().fg(palette.foreground.to_color());
        let settings = ctx.settings;

        let model = match (settings.selected_model(), settings.model.as_deref()) {
            (Some(model), _) => model.label().to_string(),
            (None, Some(raw)) if !raw.is_empty() => raw.to_string(),
            _ => "default".to_string(),
        };

        let credential = ctx.view.active_credential_field.settings_field();
        let has_key = settings.text(credential).is_some_and(|v| !v.is_empty());

        let mut lines = vec![
            Line::from(vec![Span::styled("Model  ", label), Span::styled(model, value)]),
            Line::from(vec![
                Span::styled(format!("{}  ", credential.label()), label),
                status_span(has_key, palette),
            ]),
            Line::from(vec![
                Span::styled("Images  ", label),
                Span::styled(
                    if settings.is_image_generation_enabled { "on" } else { "off" },
                    value,
                ),
            ]),
            Line::from(vec![
                Span::styled("Editor  ", label),
                Span::styled(settings.editor_theme.label(), value),
            ]),
            Line::from(vec![Span::styled("Mode  ", label), Span::styled(ctx.mode.as_str(), value)]),
        ];

        if ctx.view.show_access_code_section {
            let has_code = settings.access_code.as_deref().is_some_and(|v| !v.is_empty());
            lines.push(Line::from(vec![
                Span::styled("Access code  ", label),
                status_span(has_code, palette),
            ]));
        }
        lines
    }
}

impl Component for Sidebar {
    fn handle_event(&mut self, _event: &Event, _ctx: &RenderContext<'_>) -> Option<Action> {
        None
    }

    fn update(&mut self, _action: &Action) {}

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        let paragraph = Paragraph::new(Self::lines(ctx))
            .block(region_block(Region::Sidebar.as_str(), ctx.palette, ctx.focused));
        frame.render_widget(paragraph, area);
    }
}

/// Top-level pane: what a generation request would use right now
#[derive(Debug, Default)]
pub struct GlobalRoot;

impl GlobalRoot {
    pub fn new() -> Self {
        Self
    }
}

impl Component for GlobalRoot {
    fn handle_event(&mut self, _event: &Event, _ctx: &RenderContext<'_>) -> Option<Action> {
        None
    }

    fn update(&mut self, _action: &Action) {}

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        let palette = ctx.palette;
        let muted = palette.muted_style();

        let mut lines = match ctx.resolution {
            Ok(resolved) => vec![
                Line::from(Span::styled(
                    "Ready to generate",
                    Style::default()
                        .fg(palette.success.to_color())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled("Provider  ", muted),
                    Span::raw(format!("{} ({})", resolved.provider.as_str(), resolved.model)),
                ]),
                Line::from(vec![
                    Span::styled("Key from  ", muted),
                    Span::raw(resolved.key_source.as_str()),
                ]),
                Line::from(vec![
                    Span::styled("Endpoint  ", muted),
                    Span::raw(resolved.base_url.clone().unwrap_or_else(|| "official".to_string())),
                ]),
                Line::from(vec![
                    Span::styled("Images  ", muted),
                    Span::raw(if resolved.should_generate_images {
                        "generated"
                    } else {
                        "placeholders"
                    }),
                ]),
            ],
            Err(message) => vec![Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(palette.warning.to_color()),
            ))],
        };

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "s settings · d dark mode · u upload pane · q quit",
            muted,
        )));

        let paragraph = Paragraph::new(lines)
            .block(region_block(Region::GlobalRoot.as_str(), palette, ctx.focused))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

/// Drop target for screenshots
#[derive(Debug, Default)]
pub struct UploadContainer;

impl UploadContainer {
    pub fn new() -> Self {
        Self
    }
}

impl Component for UploadContainer {
    fn handle_event(&mut self, _event: &Event, _ctx: &RenderContext<'_>) -> Option<Action> {
        None
    }

    fn update(&mut self, _action: &Action) {}

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        let palette = ctx.palette;
        let mut lines = vec![Line::from(Span::styled(
            "Drop a screenshot here",
            Style::default().fg(palette.accent.to_color()),
        ))];

        let has_screenshot_key = ctx
            .settings
            .text(SettingsField::ScreenshotOneApiKey)
            .is_some_and(|v| !v.is_empty());
        if has_screenshot_key {
            lines.push(Line::from(Span::styled(
                "or paste a URL to capture it with ScreenshotOne",
                palette.muted_style(),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(region_block(Region::UploadContainer.as_str(), palette, ctx.focused));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{KeySource, Provider, ResolvedRequest};
    use crate::settings::{Settings, VISION_ALT_MODEL};
    use crate::theme::ThemeMode;
    use crate::view::{derive_view, Environment};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(component: &dyn Component, ctx: &RenderContext<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| component.render(frame, frame.area(), ctx))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_sidebar_names_active_credential() {
        let settings = Settings {
            model: Some(VISION_ALT_MODEL.to_string()),
            google_api_key: Some("AIza-key".to_string()),
            ..Default::default()
        };
        let palette = Palette::dark();
        let ctx = RenderContext {
            settings: &settings,
            view: derive_view(&settings, &Environment::self_hosted()),
            palette: &palette,
            mode: ThemeMode::Dark,
            resolution: Err("unused"),
            focused: false,
        };

        let text = draw(&Sidebar::new(), &ctx);
        assert!(text.contains("Google API key"));
        assert!(text.contains("✓ set"));
        assert!(text.contains("dark"));
        assert!(!text.contains("AIza-key"));
    }

    #[test]
    fn test_global_root_shows_resolution_error() {
        let settings = Settings::default();
        let palette = Palette::light();
        let ctx = RenderContext {
            settings: &settings,
            view: derive_view(&settings, &Environment::hosted()),
            palette: &palette,
            mode: ThemeMode::Light,
            resolution: Err("No API key found for OpenAI."),
            focused: true,
        };

        let text = draw(&GlobalRoot::new(), &ctx);
        assert!(text.contains("No API key found"));
    }

    #[test]
    fn test_global_root_shows_resolved_provider() {
        let settings = Settings::default();
        let palette = Palette::light();
        let resolved = ResolvedRequest {
            provider: Provider::OpenAi,
            model: "gpt-4-vision".to_string(),
            api_key: "sk-secret".to_string(),
            key_source: KeySource::Environment,
            base_url: None,
            should_generate_images: true,
        };
        let ctx = RenderContext {
            settings: &settings,
            view: derive_view(&settings, &Environment::self_hosted()),
            palette: &palette,
            mode: ThemeMode::Light,
            resolution: Ok(&resolved),
            focused: false,
        };

        let text = draw(&GlobalRoot::new(), &ctx);
        assert!(text.contains("OpenAI"));
        assert!(text.contains("environment"));
        assert!(!text.contains("sk-secret"));
    }

    #[test]
    fn test_upload_container_mentions_screenshot_one_when_configured() {
        let settings = Settings {
            screenshot_one_api_key: Some("shot-key".to_string()),
            ..Default::default()
        };
        let palette = Palette::light();
        let ctx = RenderContext {
            settings: &settings,
            view: derive_view(&settings, &Environment::self_hosted()),
            palette: &palette,
            mode: ThemeMode::Light,
            resolution: Err("unused"),
            focused: false,
        };

        let text = draw(&UploadContainer::new(), &ctx);
        assert!(text.contains("Drop a screenshot here"));
        assert!(text.contains("ScreenshotOne"));
    }
}
