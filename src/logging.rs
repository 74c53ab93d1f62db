use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, SettingsError};

const LOG_FILE_PREFIX: &str = "shotcode.log";

/// Initialize tracing with a daily-rolling file writer.
///
/// The terminal belongs to the UI, so nothing is written to stdout. Level
/// comes from `RUST_LOG` when set, else `default_level`. Keep the returned
/// guard alive for the life of the process or buffered lines are lost.
pub fn init(default_level: &str, log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir).map_err(|_| SettingsError::DataDirNotWritable {
        path: log_dir.to_path_buf(),
    })?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,shotcode={0},shotcode_settings={0}",
            default_level
        ))
    });

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| {
            SettingsError::Config(format!("Failed to install tracing subscriber: {}", e))
        })?;

    tracing::debug!("Tracing initialized in {}", log_dir.display());
    Ok(guard)
}
