//! Error types for travelog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for travelog
#[derive(Debug, Error)]
pub enum TravelogError {
    #[error("Not a travelog directory: {0}")]
    NotTravelogDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Entry already exists: {0}")]
    DuplicateEntry(String),

    #[error("An entry needs at least one photo")]
    EmptyEntry,

    #[error("Too many photos: {count} (limit is {limit})")]
    TooManyPhotos { count: usize, limit: usize },

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Reverse geocoding failed: {0}")]
    Geocode(String),

    #[error("Storage error for '{key}': {message}")]
    Storage { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TravelogError {
    /// Build a storage error for a persistence key
    pub fn storage(key: &str, message: impl Into<String>) -> Self {
        TravelogError::Storage {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TravelogError::NotTravelogDirectory(_) => 2,
            TravelogError::EntryNotFound(_) => 3,
            TravelogError::DuplicateEntry(_)
            | TravelogError::EmptyEntry
            | TravelogError::TooManyPhotos { .. }
            | TravelogError::InvalidLocation(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TravelogError::NotTravelogDirectory(path) => {
                format!(
                    "Not a travelog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'travelog init' in this directory to start a diary\n\
                    • Navigate to an existing travelog directory\n\
                    • Set TRAVELOG_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            TravelogError::EntryNotFound(id) => {
                format!(
                    "Entry not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'travelog list' to see entry ids\n\
                    • Use 'travelog saved' to see saved entries",
                    id
                )
            }
            TravelogError::EmptyEntry => "Please add at least one photo\n\n\
                Example: travelog add photos/beach.jpg -d 'Sunset at the pier'"
                .to_string(),
            TravelogError::TooManyPhotos { count, limit } => {
                format!(
                    "You can only add up to {} photos per entry (got {}).\n\n\
                    Suggestions:\n\
                    • Split the photos across several entries\n\
                    • Raise the limit: travelog config max_photos {}",
                    limit, count, count
                )
            }
            TravelogError::InvalidLocation(msg) => {
                format!(
                    "Invalid location: {}\n\n\
                    Latitude must be within -90..90 and longitude within -180..180.\n\
                    Example: travelog add photo.jpg --lat 48.8584 --lon 2.2945",
                    msg
                )
            }
            TravelogError::Config(msg) => {
                if msg.contains("Invalid theme") {
                    format!(
                        "{}\n\n\
                        Valid themes: light, dark\n\
                        Example: travelog config theme dark",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TravelogError
pub type Result<T> = std::result::Result<T, TravelogError>;
