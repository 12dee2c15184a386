//! Config management use case

use crate::domain::Theme;
use crate::error::{Result, TravelogError};
use crate::infrastructure::{Config, DiaryRepository, FileSystemRepository};
use std::str::FromStr;

/// Service for managing diary configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "theme" => Ok(config.theme.to_string()),
            "max_photos" => Ok(config.max_photos.to_string()),
            "notifications" => Ok(config.notifications.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TravelogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: theme, max_photos, notifications, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "theme" => {
                config.theme = Theme::from_str(value).map_err(TravelogError::Config)?;
            }
            "max_photos" => {
                let max = value.parse::<usize>().ok().filter(|max| *max > 0).ok_or_else(|| {
                    TravelogError::Config(format!(
                        "Invalid max_photos: '{}'. Expected a positive number",
                        value
                    ))
                })?;
                config.max_photos = max;
            }
            "notifications" => {
                config.notifications = parse_bool(value).ok_or_else(|| {
                    TravelogError::Config(format!(
                        "Invalid notifications value: '{}'. Expected on or off",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(TravelogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TravelogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: theme, max_photos, notifications",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// Switch between light and dark theme. Returns the new theme.
    pub fn toggle_theme(&self) -> Result<Theme> {
        let mut config = self.repository.load_config()?;
        config.theme = config.theme.toggled();
        self.repository.save_config(&config)?;
        Ok(config.theme)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}
