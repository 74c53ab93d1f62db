use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Terminal initialization failed: {0}")]
    Terminal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error for key '{key}': {message}")]
    Storage { key: String, message: String },

    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Data directory not writable: {path}")]
    DataDirNotWritable { path: PathBuf },

    #[error("No API key found for {provider}. Please add your API key in the settings dialog or add it to backend/.env file.")]
    MissingApiKey { provider: &'static str },
}

pub type Result<T> = std::result::Result<T, SettingsError>;
