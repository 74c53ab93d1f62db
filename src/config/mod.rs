mod theme;

pub use theme::{HexColor, Palette, PaletteConfig, PaletteOverride};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use directories::ProjectDirs;

use crate::error::{Result, SettingsError};

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "shotcode";
const APPLICATION: &str = "shotcode";
const MAIN_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub palette: PaletteConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub tick_interval_ms: u64,
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 250,
            log_level: "info".to_string(),
        }
    }
}

/// Resolves the data directory and loads `config.toml` from it
pub struct ConfigManager {
    data_dir: PathBuf,
    app_config: AppConfig,
}

impl ConfigManager {
    /// Use `data_dir` when given, otherwise the platform data directory
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => Self::default_data_dir()?,
        };
        let app_config = Self::load_app_config(&data_dir);

        Ok(Self {
            data_dir,
            app_config,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    pub fn app_config(&self) -> &AppConfig {
        &self.app_config
    }

    fn default_data_dir() -> Result<PathBuf> {
        ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(SettingsError::NoDataDir)
    }

    fn load_app_config(data_dir: &Path) -> AppConfig {
        let path = data_dir.join(MAIN_CONFIG_FILE);
        Self::load_toml_file(&path).unwrap_or_default()
    }

    fn load_toml_file<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> Option<T> {
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir).map_err(|_| SettingsError::DataDirNotWritable {
                path: self.data_dir.clone(),
            })?;
        }
        Ok(())
    }

    pub fn write_default_config(&self) -> Result<()> {
        self.ensure_data_dir()?;

        let path = self.data_dir.join(MAIN_CONFIG_FILE);
        if !path.exists() {
            let content = toml::to_string_pretty(&AppConfig::default())
                .map_err(|e| SettingsError::Config(format!("Failed to serialize config: {}", e)))?;
            std::fs::write(&path, content)
                .map_err(|e| SettingsError::Config(format!("Failed to write config: {}", e)))?;
        }

        Ok(())
    }
}
