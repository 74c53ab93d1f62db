use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::theme::ThemeMode;

/// Colors a region renders with for one theme mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: HexColor,
    pub foreground: HexColor,
    pub accent: HexColor,
    pub muted: HexColor,
    pub border: HexColor,
    pub focused_border: HexColor,
    pub highlight_bg: HexColor,
    pub success: HexColor,
    pub warning: HexColor,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: HexColor::new("#ffffff"),
            foreground: HexColor::new("#1f2328"),
            accent: HexColor::new("#0969da"),
            muted: HexColor::new("#6e7781"),
            border: HexColor::new("#d0d7de"),
            focused_border: HexColor::new("#0969da"),
            highlight_bg: HexColor::new("#ddf4ff"),
            success: HexColor::new("#1a7f37"),
            warning: HexColor::new("#9a6700"),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: HexColor::new("#1a1b26"),
            foreground: HexColor::new("#c0caf5"),
            accent: HexColor::new("#7aa2f7"),
            muted: HexColor::new("#565f89"),
            border: HexColor::new("#3b4261"),
            focused_border: HexColor::new("#bb9af7"),
            highlight_bg: HexColor::new("#364a82"),
            success: HexColor::new("#9ece6a"),
            warning: HexColor::new("#e0af68"),
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default()
            .fg(self.foreground.to_color())
            .bg(self.background.to_color())
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.focused_border.to_color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border.to_color())
        }
    }

    pub fn title_style(&self, focused: bool) -> Style {
        let mut style = Style::default().fg(self.accent.to_color());
        if focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.foreground.to_color())
            .bg(self.highlight_bg.to_color())
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted.to_color())
    }
}

/// Per-field palette overrides read from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<HexColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<HexColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<HexColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<HexColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<HexColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focused_border: Option<HexColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_bg: Option<HexColor>,
}

impl PaletteOverride {
    fn apply(&self, mut base: Palette) -> Palette {
        let slots = [
            (&self.background, &mut base.background),
            (&self.foreground, &mut base.foreground),
            (&self.accent, &mut base.accent),
            (&self.muted, &mut base.muted),
            (&self.border, &mut base.border),
            (&self.focused_border, &mut base.focused_border),
            (&self.highlight_bg, &mut base.highlight_bg),
        ];
        for (value, slot) in slots {
            if let Some(color) = value {
                *slot = color.clone();
            }
        }
        base
    }
}

/// Light and dark palette overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub light: PaletteOverride,
    pub dark: PaletteOverride,
}

impl PaletteConfig {
    pub fn for_mode(&self, mode: ThemeMode) -> Palette {
        match mode {
            ThemeMode::Light => self.light.apply(Palette::light()),
            ThemeMode::Dark => self.dark.apply(Palette::dark()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn new(hex: &str) -> Self {
        Self(hex.to_string())
    }

    pub fn to_color(&self) -> Color {
        self.parse_hex().unwrap_or(Color::Reset)
    }

    fn parse_hex(&self) -> Option<Color> {
        let hex = self.0.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color::Rgb(r, g, b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self("#ffffff".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!(HexColor::new("#ff0000").to_color(), Color::Rgb(255, 0, 0));
        assert_eq!(HexColor::new("00ff00").to_color(), Color::Rgb(0, 255, 0));
        assert_eq!(HexColor::new("#0000ff").to_color(), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_bad_hex_falls_back_to_reset() {
        assert_eq!(HexColor::new("#fff").to_color(), Color::Reset);
        assert_eq!(HexColor::new("#zzzzzz").to_color(), Color::Reset);
    }

    #[test]
    fn test_non_ascii_hex_falls_back_to_reset() {
        // six bytes, but not six characters
        assert_eq!(HexColor::new("#aé€").to_color(), Color::Reset);
        assert_eq!(HexColor::new("ééé").to_color(), Color::Reset);

        let palettes: PaletteConfig = toml::from_str("[dark]\naccent = \"#aé€\"").unwrap();
        assert_eq!(palettes.for_mode(ThemeMode::Dark).accent.to_color(), Color::Reset);
        assert_eq!(
            palettes.for_mode(ThemeMode::Dark).background,
            Palette::dark().background
        );
    }

    #[test]
    fn test_palette_for_mode() {
        let palettes = PaletteConfig::default();
        assert_eq!(palettes.for_mode(ThemeMode::Dark), Palette::dark());
        assert_eq!(palettes.for_mode(ThemeMode::Light), Palette::light());
        assert_ne!(
            palettes.for_mode(ThemeMode::Dark).background,
            palettes.for_mode(ThemeMode::Light).background
        );
    }

    #[test]
    fn test_partial_palette_override() {
        let toml_str = r##"
[dark]
accent = "#ff6b6b"
"##;
        let parsed: PaletteConfig = toml::from_str(toml_str).unwrap();
        let dark = parsed.for_mode(ThemeMode::Dark);
        assert_eq!(dark.accent.as_str(), "#ff6b6b");
        assert_eq!(dark.background, Palette::dark().background);
        assert_eq!(parsed.for_mode(ThemeMode::Light), Palette::light());
    }
}
