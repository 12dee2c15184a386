//! Configuration management

use crate::domain::Theme;
use crate::error::{Result, TravelogError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-diary metadata directory
pub const TRAVELOG_DIR: &str = ".travelog";

/// Photos allowed per entry unless configured otherwise
pub const DEFAULT_MAX_PHOTOS: usize = 10;

fn default_max_photos() -> usize {
    DEFAULT_MAX_PHOTOS
}

fn default_notifications() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_max_photos")]
    pub max_photos: usize,
    #[serde(default = "default_notifications")]
    pub notifications: bool,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            theme: Theme::default(),
            max_photos: DEFAULT_MAX_PHOTOS,
            notifications: true,
            created: Utc::now(),
        }
    }

    /// Load config from .travelog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(TRAVELOG_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TravelogError::NotTravelogDirectory(path.to_path_buf())
            } else {
                TravelogError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| TravelogError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .travelog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let travelog_dir = path.join(TRAVELOG_DIR);
        let config_path = travelog_dir.join("config.toml");

        if !travelog_dir.exists() {
            fs::create_dir(&travelog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TravelogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.max_photos == 0 {
            return Err(TravelogError::Config(
                "max_photos must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
