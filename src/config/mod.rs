//! Local Durable Configuration
//!
//! The three settings URLs are persisted to a TOML file independently of the
//! debounced remote path, and read back verbatim on the next startup. Settings
//! changes take effect for sync eligibility immediately and synchronously, so
//! this store writes through on every [`ConfigStore::save`] call.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::settings::Settings;

/// File name of the durable settings file
const SETTINGS_FILE: &str = "settings.toml";

/// Directory name under the platform config dir
const APP_DIR: &str = "bigengine";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration directory available on this platform")]
    NoConfigDir,
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Durable store for the application settings
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Open the store at the platform-default location
    pub fn open_default() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self {
            path: dir.join(APP_DIR).join(SETTINGS_FILE),
        })
    }

    /// Open the store at an explicit path
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted settings; a missing file yields defaults
    pub fn load(&self) -> Result<Settings, ConfigError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let settings = toml::from_str(&contents)?;
                tracing::debug!(path = %self.path.display(), "loaded settings");
                Ok(settings)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
                Ok(Settings::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Persist the settings, replacing the file in place
    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(settings)?;
        // Write-then-rename so a crash mid-write cannot truncate the file.
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "persisted settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_in(dir: &tempfile::TempDir) -> ConfigStore {
        ConfigStore::at_path(dir.path().join(SETTINGS_FILE))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_round_trip_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let settings = Settings {
            remote_endpoint_url: "https://sheets.example/app".to_string(),
            upload_endpoint_url: "https://drive.example/upload".to_string(),
            logo_url: "https://cdn.example/logo.png".to_string(),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut settings = Settings::default();
        settings.remote_endpoint_url = "https://first.example".to_string();
        store.save(&settings).unwrap();

        settings.remote_endpoint_url = String::new();
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not = [valid").unwrap();
        assert!(matches!(store.load(), Err(ConfigError::Parse(_))));
    }
}
