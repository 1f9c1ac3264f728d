//! Holiday configuration
//!
//! Keeps the holiday list swappable: it is read from a YAML file in a
//! configuration directory and falls back to the built-in list.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::{HolidaySet, DEFAULT_HOLIDAYS};
use crate::error::MetricsError;

/// Configuration file name
const CONFIG_FILENAME: &str = "holidays.yaml";

/// Application directory name under the platform config dir
const APP_DIR_NAME: &str = "issue-metrics";

/// Holiday configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayConfig {
    /// Holiday dates (YYYY-MM-DD)
    #[serde(default = "default_holidays")]
    pub holidays: Vec<String>,
}

fn default_holidays() -> Vec<String> {
    DEFAULT_HOLIDAYS.iter().map(|s| s.to_string()).collect()
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            holidays: default_holidays(),
        }
    }
}

impl HolidayConfig {
    /// Platform configuration directory (e.g. `~/.config/issue-metrics`)
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Loads the configuration from the platform directory
    ///
    /// Falls back to the defaults when the platform has no config directory.
    pub fn load_default() -> Self {
        match Self::default_dir() {
            Some(dir) => Self::load(&dir),
            None => {
                warn!("No platform config directory, using default holidays");
                Self::default()
            }
        }
    }

    /// Loads the configuration from a directory
    ///
    /// # Arguments
    /// * `config_dir` - Directory holding `holidays.yaml`
    ///
    /// # Returns
    /// The configuration, or the default one if the file is missing or unreadable
    pub fn load(config_dir: &Path) -> Self {
        let config_path = config_dir.join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&config_path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                warn!("Invalid holiday config {:?}, using defaults: {}", config_path, e);
                Self::default()
            }),
            Err(e) => {
                warn!("Cannot read holiday config {:?}, using defaults: {}", config_path, e);
                Self::default()
            }
        }
    }

    /// Saves the configuration to a directory, creating it if needed
    pub fn save(&self, config_dir: &Path) -> Result<(), MetricsError> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| MetricsError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Full path of the configuration file
    pub fn get_config_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILENAME)
    }

    /// Parsed holiday set; unparseable entries are skipped
    pub fn to_holiday_set(&self) -> HolidaySet {
        HolidaySet::from_strings(&self.holidays)
    }
}
