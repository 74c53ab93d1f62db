//! Merge patches over [`Settings`]
//!
//! Each slot is `None` when the patch leaves the field alone. Nullable text
//! fields carry `Some(None)` to clear a value explicitly.

use super::{EditorTheme, Settings, SettingsField};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub model: Option<Option<String>>,
    pub openai_api_key: Option<Option<String>>,
    pub google_api_key: Option<Option<String>>,
    pub openai_base_url: Option<Option<String>>,
    pub screenshot_one_api_key: Option<Option<String>>,
    pub is_image_generation_enabled: Option<bool>,
    pub editor_theme: Option<EditorTheme>,
    pub access_code: Option<Option<String>>,
}

impl SettingsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(Some(model.into()));
        self
    }

    pub fn clear_model(mut self) -> Self {
        self.model = Some(None);
        self
    }

    pub fn openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(Some(key.into()));
        self
    }

    pub fn clear_openai_api_key(mut self) -> Self {
        self.openai_api_key = Some(None);
        self
    }

    pub fn google_api_key(mut self, key: impl Into<String>) -> Self {
        self.google_api_key = Some(Some(key.into()));
        self
    }

    pub fn clear_google_api_key(mut self) -> Self {
        self.google_api_key = Some(None);
        self
    }

    pub fn openai_base_url(mut self, url: impl Into<String>) -> Self {
        self.openai_base_url = Some(Some(url.into()));
        self
    }

    pub fn screenshot_one_api_key(mut self, key: impl Into<String>) -> Self {
        self.screenshot_one_api_key = Some(Some(key.into()));
        self
    }

    pub fn image_generation(mut self, enabled: bool) -> Self {
        self.is_image_generation_enabled = Some(enabled);
        self
    }

    pub fn editor_theme(mut self, theme: EditorTheme) -> Self {
        self.editor_theme = Some(theme);
        self
    }

    pub fn access_code(mut self, code: impl Into<String>) -> Self {
        self.access_code = Some(Some(code.into()));
        self
    }

    /// Patch a single text-valued row. An empty value clears the field.
    ///
    /// Returns `None` for rows that are not free text.
    pub fn text(field: SettingsField, value: &str) -> Option<Self> {
        let value = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        let mut patch = Self::default();
        match field {
            SettingsField::AccessCode => patch.access_code = Some(value),
            SettingsField::OpenAiApiKey => patch.openai_api_key = Some(value),
            SettingsField::GoogleApiKey => patch.google_api_key = Some(value),
            SettingsField::OpenAiBaseUrl => patch.openai_base_url = Some(value),
            SettingsField::ScreenshotOneApiKey => patch.screenshot_one_api_key = Some(value),
            _ => return None,
        }
        Some(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.touched_fields().is_empty()
    }

    /// Fields this patch writes, in form order
    pub fn touched_fields(&self) -> Vec<SettingsField> {
        let mut fields = Vec::new();
        if self.access_code.is_some() {
            fields.push(SettingsField::AccessCode);
        }
        if self.is_image_generation_enabled.is_some() {
            fields.push(SettingsField::ImageGeneration);
        }
        if self.model.is_some() {
            fields.push(SettingsField::Model);
        }
        if self.openai_api_key.is_some() {
            fields.push(SettingsField::OpenAiApiKey);
        }
        if self.google_api_key.is_some() {
            fields.push(SettingsField::GoogleApiKey);
        }
        if self.openai_base_url.is_some() {
            fields.push(SettingsField::OpenAiBaseUrl);
        }
        if self.screenshot_one_api_key.is_some() {
            fields.push(SettingsField::ScreenshotOneApiKey);
        }
        if self.editor_theme.is_some() {
            fields.push(SettingsField::EditorTheme);
        }
        fields
    }

    /// Shallow merge onto `base`, producing a new value
    pub fn apply_to(&self, base: &Settings) -> Settings {
        let mut next = base.clone();
        if let Some(v) = &self.model {
            next.model = v.clone();
        }
        if let Some(v) = &self.openai_api_key {
            next.openai_api_key = v.clone();
        }
        if let Some(v) = &self.google_api_key {
            next.google_api_key = v.clone();
        }
        if let Some(v) = &self.openai_base_url {
            next.openai_base_url = v.clone();
        }
        if let Some(v) = &self.screenshot_one_api_key {
            next.screenshot_one_api_key = v.clone();
        }
        if let Some(v) = self.is_image_generation_enabled {
            next.is_image_generation_enabled = v;
        }
        if let Some(v) = self.editor_theme {
            next.editor_theme = v;
        }
        if let Some(v) = &self.access_code {
            next.access_code = v.clone();
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn configured() -> Settings {
        Settings {
            model: Some("gpt-4-vision".to_string()),
            openai_api_key: Some("sk-old".to_string()),
            google_api_key: Some("AIza-old".to_string()),
            openai_base_url: Some("https://proxy.local/v1".to_string()),
            screenshot_one_api_key: Some("shot".to_string()),
            is_image_generation_enabled: false,
            editor_theme: EditorTheme::Espresso,
            access_code: None,
        }
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let base = configured();
        assert!(SettingsPatch::new().is_empty());
        assert_eq!(SettingsPatch::new().apply_to(&base), base);
    }

    #[test]
    fn test_patch_only_touches_named_fields() {
        let base = configured();
        let next = SettingsPatch::new().openai_api_key("sk-new").apply_to(&base);
        assert_eq!(
            next,
            Settings {
                openai_api_key: Some("sk-new".to_string()),
                ..configured()
            }
        );
    }

    #[test]
    fn test_clear_is_explicit() {
        let base = configured();
        let next = SettingsPatch::new().clear_google_api_key().apply_to(&base);
        assert!(next.google_api_key.is_none());
        assert_eq!(next.openai_api_key, base.openai_api_key);
    }

    #[test]
    fn test_text_patch_empty_value_clears() {
        let patch = SettingsPatch::text(SettingsField::OpenAiBaseUrl, "").unwrap();
        assert_eq!(patch.openai_base_url, Some(None));
        assert_eq!(patch.touched_fields(), vec![SettingsField::OpenAiBaseUrl]);
    }

    #[test]
    fn test_text_patch_rejects_non_text_rows() {
        assert!(SettingsPatch::text(SettingsField::Model, "x").is_none());
        assert!(SettingsPatch::text(SettingsField::ImageGeneration, "x").is_none());
        assert!(SettingsPatch::text(SettingsField::AppTheme, "x").is_none());
    }

    #[test]
    fn test_touched_fields_in_form_order() {
        let patch = SettingsPatch::new()
            .editor_theme(EditorTheme::Cobalt)
            .model("gpt-4-vision")
            .image_generation(true);
        assert_eq!(
            patch.touched_fields(),
            vec![
                SettingsField::ImageGeneration,
                SettingsField::Model,
                SettingsField::EditorTheme,
            ]
        );
    }

    #[test]
    fn test_disjoint_patches_commute() {
        let base = configured();
        let a = SettingsPatch::new().model("models/gemini-pro-vision");
        let b = SettingsPatch::new().screenshot_one_api_key("other");
        assert_eq!(a.apply_to(&b.apply_to(&base)), b.apply_to(&a.apply_to(&base)));
    }

    #[test]
    fn test_same_field_last_write_wins() {
        let base = configured();
        let first = SettingsPatch::new().openai_api_key("one");
        let second = SettingsPatch::new().openai_api_key("two");
        let next = second.apply_to(&first.apply_to(&base));
        assert_eq!(next.openai_api_key.as_deref(), Some("two"));
    }
}
