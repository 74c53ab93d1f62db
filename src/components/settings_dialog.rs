//! Settings dialog
//!
//! Modal form over the settings store. The rows come from
//! [`ViewState::visible_fields`], so the dialog never decides for itself which
//! credential row is active: switching the model swaps the key row in place.
//!
//! Keys (normal mode):
//! - `j`/`k`, arrows: move between rows
//! - `Enter`/`Space`: edit a text row, toggle or cycle the others
//! - `h`/`l`, left/right: cycle the model or editor theme
//! - `Esc`/`q`: close
//!
//! Keys (editing a text row):
//! - `Enter`: save (an empty value clears the field)
//! - `Esc`: cancel
//! - `Ctrl+U`: show/hide a masked value
//! - `Ctrl+K`: clear the input

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use zeroize::Zeroizing;

use crate::action::Action;
use crate::components::{Component, RenderContext};
use crate::config::Palette;
use crate::settings::{mask_secret, CodeModel, Settings, SettingsField, SettingsPatch};

/// Input mode for the settings dialog
#[derive(Clone, PartialEq, Eq)]
pub enum DialogInputMode {
    Normal,
    /// Editing a text row
    Editing {
        field: SettingsField,
        buffer: Zeroizing<String>,
        /// Whether the row holds a secret
        masked: bool,
        /// Whether the user asked to see the secret in plain text
        show_plain: bool,
    },
}

pub struct SettingsDialog {
    visible: bool,
    selected: usize,
    input_mode: DialogInputMode,
}

impl Default for SettingsDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsDialog {
    pub fn new() -> Self {
        Self {
            visible: false,
            selected: 0,
            input_mode: DialogInputMode::Normal,
        }
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.selected = 0;
        self.input_mode = DialogInputMode::Normal;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.input_mode = DialogInputMode::Normal;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.input_mode, DialogInputMode::Editing { .. })
    }

    pub fn input_mode(&self) -> &DialogInputMode {
        &self.input_mode
    }

    /// Index of the highlighted row, clamped to the rows currently shown
    pub fn selected_index(&self, row_count: usize) -> usize {
        self.selected.min(row_count.saturating_sub(1))
    }

    pub fn selected_field(&self, rows: &[SettingsField]) -> Option<SettingsField> {
        rows.get(self.selected_index(rows.len())).copied()
    }

    pub fn next_item(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected = (self.selected_index(row_count) + 1) % row_count;
        }
    }

    pub fn prev_item(&mut self, row_count: usize) {
        if row_count > 0 {
            let current = self.selected_index(row_count);
            self.selected = if current == 0 { row_count - 1 } else { current - 1 };
        }
    }

    /// Start editing a text row, prefilled with its current value
    pub fn start_editing(&mut self, field: SettingsField, current: Option<&str>) {
        if !field.is_text() {
            return;
        }
        self.input_mode = DialogInputMode::Editing {
            field,
            buffer: Zeroizing::new(current.unwrap_or_default().to_string()),
            masked: field.is_secret(),
            show_plain: false,
        };
    }

    pub fn cancel_editing(&mut self) {
        self.input_mode = DialogInputMode::Normal;
    }

    /// Finish editing and turn the buffer into a patch
    pub fn confirm_edit(&mut self) -> Option<Action> {
        let mode = std::mem::replace(&mut self.input_mode, DialogInputMode::Normal);
        match mode {
            DialogInputMode::Editing { field, buffer, .. } => {
                SettingsPatch::text(field, buffer.trim()).map(Action::SettingsApply)
            }
            DialogInputMode::Normal => None,
        }
    }

    pub fn handle_edit_char(&mut self, c: char) {
        if let DialogInputMode::Editing { buffer, .. } = &mut self.input_mode {
            buffer.push(c);
        }
    }

    pub fn handle_edit_backspace(&mut self) {
        if let DialogInputMode::Editing { buffer, .. } = &mut self.input_mode {
            buffer.pop();
        }
    }

    pub fn toggle_mask_visibility(&mut self) {
        if let DialogInputMode::Editing { show_plain, .. } = &mut self.input_mode {
            *show_plain = !*show_plain;
        }
    }

    pub fn clear_input(&mut self) {
        if let DialogInputMode::Editing { buffer, .. } = &mut self.input_mode {
            buffer.clear();
        }
    }

    pub fn paste_text(&mut self, text: &str) {
        if let DialogInputMode::Editing { buffer, .. } = &mut self.input_mode {
            // keys and URLs never contain whitespace
            buffer.extend(text.chars().filter(|c| c.is_ascii_graphic()));
        }
    }

    /// Enter/Space on the highlighted row
    fn activate(&mut self, field: SettingsField, settings: &Settings) -> Option<Action> {
        match field {
            SettingsField::ImageGeneration => Some(Action::SettingsApply(
                SettingsPatch::new().image_generation(!settings.is_image_generation_enabled),
            )),
            SettingsField::Model | SettingsField::EditorTheme => self.cycle(field, settings),
            SettingsField::AppTheme => Some(Action::ToggleDarkMode),
            _ => {
                self.start_editing(field, settings.text(field));
                Some(Action::SettingsStartEdit)
            }
        }
    }

    /// Step a choice row to its next option
    fn cycle(&self, field: SettingsField, settings: &Settings) -> Option<Action> {
        match field {
            SettingsField::Model => {
                let current = settings.selected_model().unwrap_or(CodeModel::Gpt4Vision);
                Some(Action::SelectModel(current.next()))
            }
            SettingsField::EditorTheme => Some(Action::SettingsApply(
                SettingsPatch::new().editor_theme(settings.editor_theme.next()),
            )),
            _ => None,
        }
    }

    fn handle_key_normal(&mut self, key: KeyEvent, ctx: &RenderContext<'_>) -> Option<Action> {
        let rows = ctx.view.visible_fields();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.next_item(rows.len());
                Some(Action::SettingsNextItem)
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                self.prev_item(rows.len());
                Some(Action::SettingsPrevItem)
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let field = self.selected_field(&rows)?;
                self.activate(field, ctx.settings)
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                let field = self.selected_field(&rows)?;
                self.cycle(field, ctx.settings)
            }
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::SettingsClose),
            _ => None,
        }
    }

    fn handle_key_editing(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.cancel_editing();
                Some(Action::SettingsCancelEdit)
            }
            KeyCode::Enter => self.confirm_edit(),
            KeyCode::Backspace => {
                self.handle_edit_backspace();
                None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_mask_visibility();
                None
            }
            KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_input();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.handle_edit_char(c);
                None
            }
            _ => None,
        }
    }

    fn value_spans(&self, field: SettingsField, ctx: &RenderContext<'_>) -> Vec<Span<'static>> {
        let palette = ctx.palette;
        let value_style = Style::default().fg(palette.foreground.to_color());
        let muted = palette.muted_style();
        let settings = ctx.settings;

        if let DialogInputMode::Editing {
            field: editing,
            buffer,
            masked,
            show_plain,
        } = &self.input_mode
        {
            if *editing == field {
                let display = if *masked && !*show_plain {
                    "•".repeat(buffer.chars().count())
                } else {
                    buffer.to_string()
                };
                let accent = Style::default().fg(palette.accent.to_color());
                let mut spans = vec![
                    Span::styled("[", muted),
                    Span::styled(display, accent),
                    Span::styled("█", accent),
                    Span::styled("]", muted),
                ];
                if *masked {
                    spans.push(Span::styled(if *show_plain { " shown" } else { " hidden" }, muted));
                }
                return spans;
            }
        }

        match field {
            SettingsField::ImageGeneration => {
                let text = if settings.is_image_generation_enabled { "[x] on" } else { "[ ] off" };
                vec![Span::styled(text, value_style)]
            }
            SettingsField::Model => {
                let text = match (settings.selected_model(), settings.model.as_deref()) {
                    (Some(model), _) => model.label().to_string(),
                    (None, Some(raw)) if !raw.is_empty() => raw.to_string(),
                    _ => format!("{} (default)", CodeModel::Gpt4Vision.label()),
                };
                vec![Span::styled(format!("‹ {} ›", text), value_style)]
            }
            SettingsField::AppTheme => vec![Span::styled(ctx.mode.as_str(), value_style)],
            SettingsField::EditorTheme => {
                vec![Span::styled(format!("‹ {} ›", settings.editor_theme.label()), value_style)]
            }
            _ => match settings.text(field).filter(|v| !v.is_empty()) {
                Some(value) if field.is_secret() => {
                    vec![Span::styled(mask_secret(value), value_style)]
                }
                Some(value) => vec![Span::styled(value.to_string(), value_style)],
                None => vec![Span::styled("not set", muted)],
            },
        }
    }

    fn rows(&self, ctx: &RenderContext<'_>) -> Vec<Line<'static>> {
        let palette = ctx.palette;
        let rows = ctx.view.visible_fields();
        let selected = self.selected_index(rows.len());
        let mut lines = Vec::with_capacity(rows.len() * 2 + 2);

        for (idx, field) in rows.iter().copied().enumerate() {
            let is_selected = idx == selected;
            let selector = if is_selected { "▸" } else { " " };
            let (selector_style, label_style) = if is_selected {
                let selection = palette.selection_style();
                (
                    selection.fg(palette.accent.to_color()),
                    selection.add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    Style::default().fg(palette.accent.to_color()),
                    Style::default().fg(palette.foreground.to_color()),
                )
            };

            let mut spans = vec![
                Span::styled(format!(" {} ", selector), selector_style),
                Span::styled(format!("{}  ", field.label()), label_style),
            ];
            spans.extend(self.value_spans(field, ctx));
            lines.push(Line::from(spans));

            if is_selected {
                let hint = format!("     {}", field.hint());
                lines.push(Line::from(Span::styled(hint, palette.muted_style())));
            }
        }

        lines.push(Line::default());
        lines.push(Self::footer(self.is_editing(), palette));
        lines
    }

    fn footer(editing: bool, palette: &Palette) -> Line<'static> {
        let text = if editing {
            " ↵ save · Esc cancel · ^U show/hide · ^K clear"
        } else {
            " j/k move · ↵ edit/toggle · h/l cycle · Esc close"
        };
        Line::from(Span::styled(text, palette.muted_style()))
    }
}

impl Component for SettingsDialog {
    fn handle_event(&mut self, event: &Event, ctx: &RenderContext<'_>) -> Option<Action> {
        if !self.visible {
            return None;
        }
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => match &self.input_mode {
                DialogInputMode::Normal => self.handle_key_normal(*key, ctx),
                DialogInputMode::Editing { .. } => self.handle_key_editing(*key),
            },
            Event::Paste(text) => {
                self.paste_text(text);
                None
            }
            _ => None,
        }
    }

    fn update(&mut self, action: &Action) {
        match action {
            Action::SettingsOpen => self.open(),
            Action::SettingsClose => self.close(),
            Action::SettingsCancelEdit => self.cancel_editing(),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        if !self.visible {
            return;
        }
        let palette = ctx.palette;
        let lines = self.rows(ctx);

        let dialog_width = (u32::from(area.width) * 70 / 100).min(96) as u16;
        let dialog_width = dialog_width.max(40).min(area.width);
        let dialog_height = (lines.len() as u16 + 2).min(area.height);
        let dialog_x = area.x + area.width.saturating_sub(dialog_width) / 2;
        let dialog_y = area.y + area.height.saturating_sub(dialog_height) / 2;
        let dialog_area = Rect::new(dialog_x, dialog_y, dialog_width, dialog_height);

        frame.render_widget(Clear, dialog_area);

        let title = if self.is_editing() { " Settings [EDITING] " } else { " Settings " };
        let block = Block::default()
            .title(title)
            .title_style(palette.title_style(true))
            .borders(Borders::ALL)
            .border_style(palette.border_style(true))
            .style(palette.base_style());

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, dialog_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{EditorTheme, SettingsStore, VISION_ALT_MODEL};
    use crate::theme::ThemeMode;
    use crate::view::{derive_view, select_model, Environment};
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn ctx<'a>(
        settings: &'a Settings,
        env: &Environment,
        palette: &'a Palette,
    ) -> RenderContext<'a> {
        RenderContext {
            settings,
            view: derive_view(settings, env),
            palette,
            mode: ThemeMode::Light,
            resolution: Err("unused"),
            focused: true,
        }
    }

    fn draw(dialog: &SettingsDialog, ctx: &RenderContext<'_>, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| dialog.render(frame, frame.area(), ctx))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn opened() -> SettingsDialog {
        let mut dialog = SettingsDialog::new();
        dialog.open();
        dialog
    }

    fn focus(dialog: &mut SettingsDialog, target: SettingsField, ctx: &RenderContext<'_>) {
        let rows = ctx.view.visible_fields();
        let idx = rows.iter().position(|f| *f == target).unwrap();
        for _ in 0..idx {
            dialog.handle_event(&key(KeyCode::Down), ctx);
        }
        assert_eq!(dialog.selected_field(&rows), Some(target));
    }

    #[test]
    fn test_hidden_dialog_ignores_input() {
        let settings = Settings::default();
        let palette = Palette::light();
        let ctx = ctx(&settings, &Environment::self_hosted(), &palette);
        let mut dialog = SettingsDialog::new();
        assert_eq!(dialog.handle_event(&key(KeyCode::Enter), &ctx), None);
    }

    #[test]
    fn test_navigation_wraps() {
        let settings = Settings::default();
        let palette = Palette::light();
        let ctx = ctx(&settings, &Environment::self_hosted(), &palette);
        let rows = ctx.view.visible_fields();
        let mut dialog = opened();

        assert_eq!(dialog.selected_field(&rows), Some(SettingsField::ImageGeneration));
        dialog.handle_event(&key(KeyCode::Up), &ctx);
        assert_eq!(dialog.selected_field(&rows), Some(SettingsField::EditorTheme));
        dialog.handle_event(&key(KeyCode::Char('j')), &ctx);
        assert_eq!(dialog.selected_field(&rows), Some(SettingsField::ImageGeneration));
    }

    #[test]
    fn test_enter_on_model_selects_next_model() {
        let settings = Settings::default();
        let palette = Palette::light();
        let ctx = ctx(&settings, &Environment::self_hosted(), &palette);
        let mut dialog = opened();
        focus(&mut dialog, SettingsField::Model, &ctx);

        let action = dialog.handle_event(&key(KeyCode::Enter), &ctx);
        assert_eq!(action, Some(Action::SelectModel(CodeModel::GeminiProVision)));
    }

    #[test]
    fn test_credential_row_swaps_in_place_after_model_change() {
        let env = Environment::self_hosted();
        let palette = Palette::light();
        let mut store = SettingsStore::new(Settings::default());
        let mut dialog = opened();

        let before = ctx(store.current(), &env, &palette);
        focus(&mut dialog, SettingsField::OpenAiApiKey, &before);
        let index = dialog.selected_index(before.view.visible_fields().len());

        let view = select_model(&mut store, CodeModel::GeminiProVision, &env);
        let rows = view.visible_fields();
        assert_eq!(dialog.selected_index(rows.len()), index);
        assert_eq!(dialog.selected_field(&rows), Some(SettingsField::GoogleApiKey));
        assert!(!rows.contains(&SettingsField::OpenAiApiKey));
    }

    #[test]
    fn test_edit_key_produces_patch() {
        let settings = Settings::default();
        let palette = Palette::light();
        let ctx = ctx(&settings, &Environment::self_hosted(), &palette);
        let mut dialog = opened();
        focus(&mut dialog, SettingsField::OpenAiApiKey, &ctx);

        assert_eq!(
            dialog.handle_event(&key(KeyCode::Enter), &ctx),
            Some(Action::SettingsStartEdit)
        );
        assert!(dialog.is_editing());
        for c in "sk-test".chars() {
            dialog.handle_event(&key(KeyCode::Char(c)), &ctx);
        }
        let action = dialog.handle_event(&key(KeyCode::Enter), &ctx);
        assert_eq!(
            action,
            Some(Action::SettingsApply(SettingsPatch::new().openai_api_key("sk-test")))
        );
        assert!(!dialog.is_editing());
    }

    #[test]
    fn test_clearing_a_field_produces_clear_patch() {
        let settings = Settings {
            google_api_key: Some("AIza-old".to_string()),
            model: Some(VISION_ALT_MODEL.to_string()),
            ..Default::default()
        };
        let palette = Palette::light();
        let ctx = ctx(&settings, &Environment::self_hosted(), &palette);
        let mut dialog = opened();
        focus(&mut dialog, SettingsField::GoogleApiKey, &ctx);

        dialog.handle_event(&key(KeyCode::Enter), &ctx);
        match dialog.input_mode() {
            DialogInputMode::Editing { buffer, masked, .. } => {
                assert_eq!(buffer.as_str(), "AIza-old");
                assert!(*masked);
            }
            DialogInputMode::Normal => panic!("expected editing mode"),
        }

        dialog.handle_event(&ctrl('k'), &ctx);
        let action = dialog.handle_event(&key(KeyCode::Enter), &ctx);
        assert_eq!(
            action,
            Some(Action::SettingsApply(SettingsPatch::new().clear_google_api_key()))
        );
    }

    #[test]
    fn test_escape_cancels_edit_without_patch() {
        let settings = Settings::default();
        let palette = Palette::light();
        let ctx = ctx(&settings, &Environment::self_hosted(), &palette);
        let mut dialog = opened();
        focus(&mut dialog, SettingsField::ScreenshotOneApiKey, &ctx);

        dialog.handle_event(&key(KeyCode::Enter), &ctx);
        dialog.handle_event(&key(KeyCode::Char('x')), &ctx);
        assert_eq!(dialog.handle_event(&key(KeyCode::Esc), &ctx), Some(Action::SettingsCancelEdit));
        assert!(!dialog.is_editing());
        assert!(dialog.is_visible());
    }

    #[test]
    fn test_paste_filters_whitespace() {
        let settings = Settings::default();
        let palette = Palette::light();
        let ctx = ctx(&settings, &Environment::hosted(), &palette);
        let mut dialog = opened();
        focus(&mut dialog, SettingsField::AccessCode, &ctx);

        dialog.handle_event(&key(KeyCode::Enter), &ctx);
        dialog.handle_event(&Event::Paste(" code-42\n".to_string()), &ctx);
        let action = dialog.handle_event(&key(KeyCode::Enter), &ctx);
        assert_eq!(
            action,
            Some(Action::SettingsApply(SettingsPatch::new().access_code("code-42")))
        );
    }

    #[test]
    fn test_toggle_rows() {
        let settings = Settings::default();
        let palette = Palette::light();
        let ctx = ctx(&settings, &Environment::self_hosted(), &palette);
        let mut dialog = opened();

        let action = dialog.handle_event(&key(KeyCode::Char(' ')), &ctx);
        assert_eq!(
            action,
            Some(Action::SettingsApply(SettingsPatch::new().image_generation(false)))
        );

        focus(&mut dialog, SettingsField::AppTheme, &ctx);
        assert_eq!(dialog.handle_event(&key(KeyCode::Enter), &ctx), Some(Action::ToggleDarkMode));

        dialog.handle_event(&key(KeyCode::Down), &ctx);
        assert_eq!(
            dialog.handle_event(&key(KeyCode::Right), &ctx),
            Some(Action::SettingsApply(SettingsPatch::new().editor_theme(EditorTheme::Espresso)))
        );
    }

    #[test]
    fn test_escape_closes_in_normal_mode() {
        let settings = Settings::default();
        let palette = Palette::light();
        let ctx = ctx(&settings, &Environment::self_hosted(), &palette);
        let mut dialog = opened();

        let action = dialog.handle_event(&key(KeyCode::Esc), &ctx);
        assert_eq!(action, Some(Action::SettingsClose));
        dialog.update(&Action::SettingsClose);
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_render_masks_stored_keys() {
        let settings = Settings {
            openai_api_key: Some("sk-abcdefghijkl".to_string()),
            ..Default::default()
        };
        let palette = Palette::light();
        let ctx = ctx(&settings, &Environment::self_hosted(), &palette);
        let dialog = opened();

        let buffer = draw(&dialog, &ctx, 100, 30);
        let text = buffer_text(&buffer);

        assert!(text.contains("Settings"));
        assert!(text.contains("OpenAI API key"));
        assert!(text.contains("ijkl"));
        assert!(!text.contains("sk-abcdefghijkl"));
        assert!(!text.contains("Access code"));
    }

    #[test]
    fn test_selected_row_uses_selection_colors() {
        let settings = Settings::default();
        let palette = Palette::light();
        let ctx = ctx(&settings, &Environment::self_hosted(), &palette);
        let dialog = opened();

        let buffer = draw(&dialog, &ctx, 100, 30);
        let highlight = palette.highlight_bg.to_color();
        let marker = buffer
            .content()
            .iter()
            .position(|cell| cell.symbol() == "▸")
            .unwrap();
        let (x, y) = buffer.pos_of(marker);
        assert_eq!(buffer[(x, y)].bg, highlight);
        assert_eq!(buffer[(x + 2, y)].bg, highlight);

        // rows below the selection keep the dialog background
        let rows_below = (y + 2..buffer.area.height)
            .filter(|row| buffer[(x + 2, *row)].bg == highlight)
            .count();
        assert_eq!(rows_below, 0);
    }

    #[test]
    fn test_render_on_very_wide_terminal() {
        let settings = Settings::default();
        let palette = Palette::dark();
        let ctx = ctx(&settings, &Environment::self_hosted(), &palette);
        let dialog = opened();

        let buffer = draw(&dialog, &ctx, 1000, 30);
        let text = buffer_text(&buffer);
        assert!(text.contains("Settings"));
        assert!(text.contains("OpenAI API key"));

        let top = text.lines().position(|line| line.contains("Settings")).unwrap() as u16;
        let left = (0..buffer.area.width)
            .find(|x| buffer[(*x, top)].symbol() == "┌")
            .unwrap();
        let right = (0..buffer.area.width)
            .find(|x| buffer[(*x, top)].symbol() == "┐")
            .unwrap();
        assert_eq!(right - left + 1, 96);
        assert_eq!(left, (1000 - 96) / 2);
    }
}
