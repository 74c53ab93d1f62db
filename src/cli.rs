use std::path::PathBuf;

use clap::Parser;

use crate::resolve::Fallbacks;
use crate::view::Environment;

/// shotcode: settings for the screenshot-to-code front-end
#[derive(Parser, Debug, Clone)]
#[command(name = "shotcode")]
#[command(author = "RidgetopAI")]
#[command(version)]
#[command(about = "Edit screenshot-to-code settings from the terminal", long_about = None)]
pub struct Cli {
    /// Run as the hosted service: hides the base URL field and shows the
    /// access code section.
    #[arg(long, env = "SHOTCODE_IS_PROD", default_value_t = false)]
    pub hosted: bool,

    /// Directory holding settings.json, config.toml and logs
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long, default_value_t = false)]
    pub dark: bool,

    /// Log level (trace, debug, info, warn, error). Overrides config.toml.
    #[arg(long)]
    pub log_level: Option<String>,

    /// OpenAI API key used when the settings leave it empty
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Google API key used when the settings leave it empty
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: Option<String>,

    /// OpenAI base URL used when the settings leave it empty
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub openai_base_url: Option<String>,

    /// Platform OpenAI key used with an access code
    #[arg(long, env = "PLATFORM_OPENAI_API_KEY", hide_env_values = true)]
    pub platform_openai_api_key: Option<String>,

    /// Platform Google key used with an access code
    #[arg(long, env = "PLATFORM_GOOGLE_API_KEY", hide_env_values = true)]
    pub platform_google_api_key: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn environment(&self) -> Environment {
        Environment {
            is_hosted_deployment: self.hosted,
        }
    }

    pub fn fallbacks(&self) -> Fallbacks {
        Fallbacks {
            openai_api_key: self.openai_api_key.clone(),
            google_api_key: self.google_api_key.clone(),
            openai_base_url: self.openai_base_url.clone(),
            platform_openai_api_key: self.platform_openai_api_key.clone(),
            platform_google_api_key: self.platform_google_api_key.clone(),
        }
    }
}
