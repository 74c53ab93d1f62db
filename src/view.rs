//! Field visibility derived from settings and the deployment environment
//!
//! Everything here is a pure function of `(Settings, Environment)`. Which
//! credential row is active is always computed from `Settings::model`;
//! nothing mirrors it.

use crate::settings::{
    CodeModel, Settings, SettingsField, SettingsPatch, SettingsStore, VISION_ALT_MODEL,
};

/// Deployment facts fixed at build/deploy time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Environment {
    pub is_hosted_deployment: bool,
}

impl Environment {
    pub fn hosted() -> Self {
        Self {
            is_hosted_deployment: true,
        }
    }

    pub fn self_hosted() -> Self {
        Self {
            is_hosted_deployment: false,
        }
    }
}

/// Which provider key the form offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    OpenAi,
    Google,
}

impl CredentialField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialField::OpenAi => "openai",
            CredentialField::Google => "google",
        }
    }

    pub fn settings_field(&self) -> SettingsField {
        match self {
            CredentialField::OpenAi => SettingsField::OpenAiApiKey,
            CredentialField::Google => SettingsField::GoogleApiKey,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub active_credential_field: CredentialField,
    pub show_base_url_field: bool,
    pub show_access_code_section: bool,
}

impl ViewState {
    /// Rows of the settings form, top to bottom
    pub fn visible_fields(&self) -> Vec<SettingsField> {
        let mut fields = Vec::with_capacity(8);
        if self.show_access_code_section {
            fields.push(SettingsField::AccessCode);
        }
        fields.push(SettingsField::ImageGeneration);
        fields.push(SettingsField::Model);
        fields.push(self.active_credential_field.settings_field());
        if self.show_base_url_field {
            fields.push(SettingsField::OpenAiBaseUrl);
        }
        fields.push(SettingsField::ScreenshotOneApiKey);
        fields.push(SettingsField::AppTheme);
        fields.push(SettingsField::EditorTheme);
        fields
    }

    pub fn is_visible(&self, field: SettingsField) -> bool {
        self.visible_fields().contains(&field)
    }
}

/// Derive the form layout. An unset or unrecognized model selects OpenAI.
pub fn derive_view(settings: &Settings, env: &Environment) -> ViewState {
    let active_credential_field = match settings.model.as_deref() {
        Some(VISION_ALT_MODEL) => CredentialField::Google,
        Some(_) | None => CredentialField::OpenAi,
    };

    ViewState {
        active_credential_field,
        show_base_url_field: !env.is_hosted_deployment,
        show_access_code_section: env.is_hosted_deployment,
    }
}

/// Provider state implied by the selected model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderState {
    OpenAiActive,
    GeminiActive,
}

impl ProviderState {
    pub fn of(settings: &Settings) -> Self {
        match settings.model.as_deref() {
            Some(VISION_ALT_MODEL) => ProviderState::GeminiActive,
            _ => ProviderState::OpenAiActive,
        }
    }
}

/// Apply a model choice from the selector and re-derive the view
pub fn select_model(store: &mut SettingsStore, model: CodeModel, env: &Environment) -> ViewState {
    let from = ProviderState::of(store.current());
    store.update(SettingsPatch::new().model(model.id()));
    let to = ProviderState::of(store.current());
    if from != to {
        tracing::debug!("Provider transition: {:?} -> {:?}", from, to);
    }
    derive_view(store.current(), env)
}
