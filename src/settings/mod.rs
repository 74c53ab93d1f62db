//! Settings model for the screenshot-to-code front-end
//!
//! A [`Settings`] value is created once at startup (from persisted state or
//! defaults) and is replaced, never mutated in place, on every edit. All
//! edits go through [`SettingsStore::update`] as merge patches.

mod patch;
mod store;

pub use patch::SettingsPatch;
pub use store::{SettingsObserver, SettingsSink, SettingsStore, SubscriptionId};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Model identifier that routes generation to Google instead of OpenAI.
pub const VISION_ALT_MODEL: &str = "models/gemini-pro-vision";

/// Model identifier offered as the first (OpenAI) choice.
pub const DEFAULT_MODEL: &str = "gpt-4-vision";

/// Closed set of models the settings dialog offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeModel {
    Gpt4Vision,
    GeminiProVision,
}

impl CodeModel {
    pub const ALL: &'static [CodeModel] = &[CodeModel::Gpt4Vision, CodeModel::GeminiProVision];

    /// Identifier stored in `Settings::model`
    pub fn id(&self) -> &'static str {
        match self {
            CodeModel::Gpt4Vision => DEFAULT_MODEL,
            CodeModel::GeminiProVision => VISION_ALT_MODEL,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CodeModel::Gpt4Vision => "GPT 4 Vision",
            CodeModel::GeminiProVision => "Gemini Pro Vision",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.id() == id)
    }

    /// Next entry in the selector, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Code editor color scheme. Takes effect after a reload of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorTheme {
    #[default]
    Cobalt,
    Espresso,
}

impl EditorTheme {
    pub const ALL: &'static [EditorTheme] = &[EditorTheme::Cobalt, EditorTheme::Espresso];

    pub fn as_str(&self) -> &'static str {
        match self {
            EditorTheme::Cobalt => "cobalt",
            EditorTheme::Espresso => "espresso",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EditorTheme::Cobalt => "Cobalt",
            EditorTheme::Espresso => "Espresso",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            EditorTheme::Cobalt => EditorTheme::Espresso,
            EditorTheme::Espresso => EditorTheme::Cobalt,
        }
    }
}

/// The user-editable configuration bundle.
///
/// Serialized with the camelCase keys the browser client used, so a blob
/// written by either side can be read by the other.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(rename = "openAiApiKey", skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
    #[serde(rename = "googleApiKey", skip_serializing_if = "Option::is_none")]
    pub google_api_key: Option<String>,
    #[serde(rename = "openAiBaseURL", skip_serializing_if = "Option::is_none")]
    pub openai_base_url: Option<String>,
    #[serde(rename = "screenshotOneApiKey", skip_serializing_if = "Option::is_none")]
    pub screenshot_one_api_key: Option<String>,
    #[serde(rename = "isImageGenerationEnabled")]
    pub is_image_generation_enabled: bool,
    #[serde(rename = "editorTheme")]
    pub editor_theme: EditorTheme,
    #[serde(rename = "accessCode", skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: None,
            openai_api_key: None,
            google_api_key: None,
            openai_base_url: None,
            screenshot_one_api_key: None,
            is_image_generation_enabled: true,
            editor_theme: EditorTheme::default(),
            access_code: None,
        }
    }
}

impl Settings {
    /// The offered model matching `model`, if it is one of the closed set
    pub fn selected_model(&self) -> Option<CodeModel> {
        self.model.as_deref().and_then(CodeModel::from_id)
    }

    /// Current text value of a text-valued field
    pub fn text(&self, field: SettingsField) -> Option<&str> {
        match field {
            SettingsField::Model => self.model.as_deref(),
            SettingsField::OpenAiApiKey => self.openai_api_key.as_deref(),
            SettingsField::GoogleApiKey => self.google_api_key.as_deref(),
            SettingsField::OpenAiBaseUrl => self.openai_base_url.as_deref(),
            SettingsField::ScreenshotOneApiKey => self.screenshot_one_api_key.as_deref(),
            SettingsField::AccessCode => self.access_code.as_deref(),
            SettingsField::ImageGeneration
            | SettingsField::AppTheme
            | SettingsField::EditorTheme => None,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = |v: &Option<String>| v.as_deref().map(mask_secret);
        f.debug_struct("Settings")
            .field("model", &self.model)
            .field("openai_api_key", &masked(&self.openai_api_key))
            .field("google_api_key", &masked(&self.google_api_key))
            .field("openai_base_url", &self.openai_base_url)
            .field("screenshot_one_api_key", &masked(&self.screenshot_one_api_key))
            .field("is_image_generation_enabled", &self.is_image_generation_enabled)
            .field("editor_theme", &self.editor_theme)
            .field("access_code", &masked(&self.access_code))
            .finish()
    }
}

/// A row of the settings form.
///
/// `AppTheme` is a form row but not a `Settings` field: the light/dark mode
/// lives in [`crate::theme::ThemeBroadcast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingsField {
    AccessCode,
    ImageGeneration,
    Model,
    OpenAiApiKey,
    GoogleApiKey,
    OpenAiBaseUrl,
    ScreenshotOneApiKey,
    AppTheme,
    EditorTheme,
}

impl SettingsField {
    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::AccessCode => "Access code",
            SettingsField::ImageGeneration => "DALL-E placeholder image generation",
            SettingsField::Model => "Model",
            SettingsField::OpenAiApiKey => "OpenAI API key",
            SettingsField::GoogleApiKey => "Google API key",
            SettingsField::OpenAiBaseUrl => "OpenAI Base URL (optional)",
            SettingsField::ScreenshotOneApiKey => "ScreenshotOne API key",
            SettingsField::AppTheme => "App theme",
            SettingsField::EditorTheme => "Code editor theme",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            SettingsField::AccessCode => "Use the hosted platform keys instead of your own",
            SettingsField::ImageGeneration => "More fun with it but if you want to save money, turn it off",
            SettingsField::Model => "Select model to use",
            SettingsField::OpenAiApiKey | SettingsField::GoogleApiKey => {
                "Only stored locally. Overrides your .env config"
            }
            SettingsField::OpenAiBaseUrl => "Replace with a proxy URL if you don't want to use the default",
            SettingsField::ScreenshotOneApiKey => "Use URLs directly instead of taking the screenshot yourself",
            SettingsField::AppTheme => "Toggle dark mode",
            SettingsField::EditorTheme => "Requires a reload to update",
        }
    }

    /// Rows edited through a free-text input
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            SettingsField::AccessCode
                | SettingsField::OpenAiApiKey
                | SettingsField::GoogleApiKey
                | SettingsField::OpenAiBaseUrl
                | SettingsField::ScreenshotOneApiKey
        )
    }

    /// Rows whose value is masked on screen
    pub fn is_secret(&self) -> bool {
        matches!(
            self,
            SettingsField::AccessCode
                | SettingsField::OpenAiApiKey
                | SettingsField::GoogleApiKey
                | SettingsField::ScreenshotOneApiKey
        )
    }
}

/// Render a secret for display: the last four characters survive for long
/// values, everything else becomes bullets.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 8 {
        return "•".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "•".repeat(count - 4), tail)
}
