//! Client-local key-value persistence for the settings blob
//!
//! Settings are stored as one JSON document under [`SETTINGS_KEY`]. The
//! store behind it is pluggable: [`FileStore`] keeps one `<key>.json` file
//! per key in the data directory, [`MemoryStore`] backs tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::{Result, SettingsError};
use crate::settings::{Settings, SettingsSink};

/// Stable identifier the settings blob is stored under
pub const SETTINGS_KEY: &str = "settings";

/// Where an unparseable settings blob is copied before defaults take over
pub const CORRUPT_SETTINGS_KEY: &str = "settings.corrupt";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn storage_error(key: &str, e: impl std::fmt::Display) -> SettingsError {
        SettingsError::Storage {
            key: key.to_string(),
            message: e.to_string(),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| Self::storage_error(key, e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|e| Self::storage_error(key, e))?;
        }

        // readers only ever see a complete blob
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| Self::storage_error(key, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| Self::storage_error(key, e))?;
        Ok(())
    }
}

/// Shared in-memory store; clones see the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads the initial settings and acts as the store's on-change sink
pub struct SettingsPersistence<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SettingsPersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted settings.
    ///
    /// A missing blob yields defaults. So does an unreadable or corrupt one.
    /// A corrupt blob is first copied to [`CORRUPT_SETTINGS_KEY`].
    pub fn load(&mut self) -> Settings {
        match self.store.get(SETTINGS_KEY) {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(
                        "Persisted settings are corrupt, using defaults (copy kept as '{}'): {}",
                        CORRUPT_SETTINGS_KEY,
                        e
                    );
                    if let Err(e) = self.store.set(CORRUPT_SETTINGS_KEY, &blob) {
                        tracing::warn!("Failed to keep a copy of corrupt settings: {}", e);
                    }
                    Settings::default()
                }
            },
            Ok(None) => {
                tracing::debug!("No persisted settings, using defaults");
                Settings::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read persisted settings: {}", e);
                Settings::default()
            }
        }
    }
}

impl<S: KeyValueStore> SettingsSink for SettingsPersistence<S> {
    fn save(&mut self, settings: &Settings) -> Result<()> {
        let blob = serde_json::to_string(settings).map_err(|e| SettingsError::Storage {
            key: SETTINGS_KEY.to_string(),
            message: e.to_string(),
        })?;
        self.store.set(SETTINGS_KEY, &blob)
    }
}
