//! Settings persistence
//!
//! Settings live in a pretty-printed JSON file under the platform config
//! directory (`~/Library/Application Support` on macOS, `%APPDATA%` on
//! Windows, `$XDG_CONFIG_HOME` elsewhere).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::BaseDirs;
use log::{debug, error, info};

use crate::constants::{SETTINGS_DIRECTORY, SETTINGS_FILE_NAME};
use crate::errors::settings_error;

use super::model::Settings;

/// Location of the settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    /// Settings file at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        SettingsFile { path: path.into() }
    }

    /// Settings file in the platform configuration directory
    ///
    /// # Errors
    /// Returns an error if no home directory can be determined
    pub fn default_location() -> Result<Self> {
        let dirs = BaseDirs::new()
            .ok_or_else(|| anyhow!("Failed to determine the user configuration directory"))?;
        Ok(SettingsFile::at(
            dirs.config_dir()
                .join(SETTINGS_DIRECTORY)
                .join(SETTINGS_FILE_NAME),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads settings, writing the defaults on first run
    ///
    /// A file that exists but cannot be parsed is left untouched and the
    /// defaults are returned.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, or if the
    /// defaults cannot be written on first run
    pub fn load_or_create(&self) -> Result<Settings> {
        if !self.path.exists() {
            let defaults = Settings::default();
            self.save(&defaults)?;
            info!("Created default settings at {}", self.path.display());
            return Ok(defaults);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| settings_error(e, self.path.clone(), "read"))?;

        match serde_json::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Settings loaded from {}", self.path.display());
                Ok(settings)
            }
            Err(e) => {
                error!(
                    "Failed to parse settings file {}: {}. Using defaults.",
                    self.path.display(),
                    e
                );
                Ok(Settings::default())
            }
        }
    }

    /// Writes settings, creating the parent directories if needed
    ///
    /// # Errors
    /// Returns an error if the directory or the file cannot be written
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)
                    .map_err(|e| settings_error(e, dir.to_path_buf(), "create directory for"))?;
            }
        }

        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, content)
            .map_err(|e| settings_error(e, self.path.clone(), "write"))?;

        debug!("Settings saved to {}", self.path.display());
        Ok(())
    }
}
