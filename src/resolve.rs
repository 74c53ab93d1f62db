//! Resolve the provider, key and endpoint a generation request would use
//!
//! Precedence follows the backend the settings dialog feeds:
//! - an access code routes to the platform keys;
//! - otherwise the key for the selected provider comes from settings,
//!   then from the process environment;
//! - a custom OpenAI base URL is honored only in self-hosted mode.
//!
//! Nothing here talks to the network or checks that a key is valid.

use std::fmt;

use crate::error::{Result, SettingsError};
use crate::settings::{mask_secret, Settings, DEFAULT_MODEL};
use crate::view::{derive_view, CredentialField, Environment};

/// Values the process environment supplies when settings leave a gap
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Fallbacks {
    pub openai_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub platform_openai_api_key: Option<String>,
    pub platform_google_api_key: Option<String>,
}

impl fmt::Debug for Fallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = |v: &Option<String>| v.as_deref().map(mask_secret);
        f.debug_struct("Fallbacks")
            .field("openai_api_key", &masked(&self.openai_api_key))
            .field("google_api_key", &masked(&self.google_api_key))
            .field("openai_base_url", &self.openai_base_url)
            .field("platform_openai_api_key", &masked(&self.platform_openai_api_key))
            .field("platform_google_api_key", &masked(&self.platform_google_api_key))
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Gemini,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OpenAI",
            Provider::Gemini => "Google",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Settings,
    Environment,
    Platform,
}

impl KeySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeySource::Settings => "settings dialog",
            KeySource::Environment => "environment",
            KeySource::Platform => "platform access code",
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub provider: Provider,
    pub model: String,
    pub api_key: String,
    pub key_source: KeySource,
    /// `None` means the official endpoint
    pub base_url: Option<String>,
    pub should_generate_images: bool,
}

impl fmt::Debug for ResolvedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedRequest")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &mask_secret(&self.api_key))
            .field("key_source", &self.key_source)
            .field("base_url", &self.base_url)
            .field("should_generate_images", &self.should_generate_images)
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

pub fn resolve(
    settings: &Settings,
    env: &Environment,
    fallbacks: &Fallbacks,
) -> Result<ResolvedRequest> {
    let view = derive_view(settings, env);
    let provider = match view.active_credential_field {
        CredentialField::Google => Provider::Gemini,
        CredentialField::OpenAi => Provider::OpenAi,
    };
    let model = non_empty(settings.model.as_deref()).unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let (api_key, key_source) = if non_empty(settings.access_code.as_deref()).is_some() {
        let platform = match provider {
            Provider::OpenAi => fallbacks.platform_openai_api_key.as_deref(),
            Provider::Gemini => fallbacks.platform_google_api_key.as_deref(),
        };
        (non_empty(platform), KeySource::Platform)
    } else {
        let (own, from_env) = match provider {
            Provider::OpenAi => (
                settings.openai_api_key.as_deref(),
                fallbacks.openai_api_key.as_deref(),
            ),
            Provider::Gemini => (
                settings.google_api_key.as_deref(),
                fallbacks.google_api_key.as_deref(),
            ),
        };
        match non_empty(own) {
            Some(key) => (Some(key), KeySource::Settings),
            None => (non_empty(from_env), KeySource::Environment),
        }
    };

    let api_key = api_key.ok_or(SettingsError::MissingApiKey {
        provider: provider.as_str(),
    })?;

    let base_url = match provider {
        Provider::OpenAi if view.show_base_url_field => {
            non_empty(settings.openai_base_url.as_deref())
                .or_else(|| non_empty(fallbacks.openai_base_url.as_deref()))
        }
        _ => None,
    };

    let resolved = ResolvedRequest {
        provider,
        model,
        api_key,
        key_source,
        base_url,
        should_generate_images: provider == Provider::OpenAi
            && settings.is_image_generation_enabled,
    };
    tracing::debug!(
        "Resolved {} key from {}, base url: {}",
        resolved.provider.as_str(),
        resolved.key_source.as_str(),
        resolved.base_url.as_deref().unwrap_or("official")
    );
    Ok(resolved)
}
