//! Configuration module for seatmap
//!
//! Manages application settings such as the default chart file and a
//! default selection limit. Configuration is stored in the user's config
//! directory (`~/.config/seatmap/config.toml` on Linux).

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SeatmapConfig {
    /// Chart definition used when a command is given no chart path
    #[serde(default)]
    pub default_chart: Option<PathBuf>,

    /// Selection limit applied when a chart does not set its own
    #[serde(default)]
    pub max_selectable_seats: Option<usize>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl SeatmapConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("seatmap").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it does not exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Set the default chart file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the chart file does not exist.
    pub fn set_default_chart(&mut self, path: PathBuf) -> Result<(), ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Message(format!(
                "Chart file '{}' does not exist",
                path.display()
            )));
        }
        self.default_chart = Some(path);
        Ok(())
    }

    /// Set the default selection limit; zero clears it
    pub fn set_max_selectable_seats(&mut self, max: usize) {
        self.max_selectable_seats = (max > 0).then_some(max);
    }

    /// Chart path to use, preferring an explicit one
    #[must_use]
    pub fn resolve_chart(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| self.default_chart.clone())
    }
}
