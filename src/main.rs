use color_eyre::eyre::Result;

use shotcode_settings::app::App;
use shotcode_settings::cli::Cli;
use shotcode_settings::config::ConfigManager;
use shotcode_settings::logging;
use shotcode_settings::persist::{FileStore, SettingsPersistence};
use shotcode_settings::settings::SettingsStore;
use shotcode_settings::theme::{ThemeBroadcast, ThemeMode};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_args();

    let config = ConfigManager::new(cli.data_dir.clone())?;
    config.write_default_config()?;

    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.app_config().general.log_level.clone());
    // Held until exit so buffered log lines are flushed
    let _log_guard = logging::init(&log_level, &config.log_dir())?;
    tracing::info!("shotcode {} using {}", env!("CARGO_PKG_VERSION"), config.data_dir().display());

    let mut persistence = SettingsPersistence::new(FileStore::new(config.data_dir()));
    let initial = persistence.load();
    let store = SettingsStore::with_sink(initial, Box::new(persistence));

    let theme = ThemeBroadcast::with_all_regions(ThemeMode::from_dark(cli.dark));

    let mut app = App::new(store, cli.environment(), cli.fallbacks(), theme, config.app_config());
    app.run()?;

    Ok(())
}
