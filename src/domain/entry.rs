//! Diary entry and saved-entry records

use serde::{Deserialize, Serialize};

/// Geographic coordinates captured with an entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Create a location, rejecting coordinates outside the valid ranges
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, String> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(format!("latitude {} is out of range", latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(format!("longitude {} is out of range", longitude));
        }
        Ok(Location {
            latitude,
            longitude,
        })
    }

    /// Raw coordinates formatted to 6 decimal places, comma-joined
    pub fn coordinates_label(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// One diary post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub image_uris: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub address: String,
    pub timestamp: String,
    #[serde(default)]
    pub location: Option<Location>,
}

impl Entry {
    /// Description text, empty when absent
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Message handed to the share sheet
    pub fn share_message(&self) -> String {
        format!(
            "Check out this location from my travel diary: {}\n\n{}",
            self.address,
            self.description_text()
        )
    }
}

/// Snapshot of an entry taken when the user saved it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedEntry {
    #[serde(flatten)]
    pub entry: Entry,
    #[serde(rename = "savedAt")]
    pub saved_at: String,
}

impl SavedEntry {
    pub fn new(entry: Entry, saved_at: String) -> Self {
        SavedEntry { entry, saved_at }
    }

    pub fn id(&self) -> &str {
        &self.entry.id
    }
}
