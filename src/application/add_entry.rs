//! Add entry use case

use crate::domain::timestamp::format_display;
use crate::domain::{Entry, Location};
use crate::error::{Result, TravelogError};
use crate::infrastructure::{
    resolve_address, EntryRepository, KeyValueStore, Notification, Notifier, ReverseGeocoder,
};
use chrono::{DateTime, Local};
use std::collections::HashSet;
use tracing::info;

/// What the user captured for a new entry
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub image_uris: Vec<String>,
    pub description: Option<String>,
    /// Raw (latitude, longitude) from the position query
    pub coordinates: Option<(f64, f64)>,
    /// Explicit location label; skips reverse geocoding
    pub address: Option<String>,
}

/// Service for creating entries
pub struct AddEntryService<'a, S> {
    entries: &'a EntryRepository<S>,
    geocoder: &'a dyn ReverseGeocoder,
    notifier: &'a dyn Notifier,
    max_photos: usize,
}

impl<'a, S: KeyValueStore> AddEntryService<'a, S> {
    pub fn new(
        entries: &'a EntryRepository<S>,
        geocoder: &'a dyn ReverseGeocoder,
        notifier: &'a dyn Notifier,
        max_photos: usize,
    ) -> Self {
        AddEntryService {
            entries,
            geocoder,
            notifier,
            max_photos,
        }
    }

    /// Validate the draft, build the entry and store it
    pub fn execute(&self, draft: EntryDraft) -> Result<Entry> {
        self.execute_at(draft, Local::now())
    }

    /// Same as `execute` with an explicit creation instant
    pub fn execute_at(&self, draft: EntryDraft, now: DateTime<Local>) -> Result<Entry> {
        // 1. Photos: at least one, at most the configured limit
        if draft.image_uris.is_empty() {
            return Err(TravelogError::EmptyEntry);
        }
        if draft.image_uris.len() > self.max_photos {
            return Err(TravelogError::TooManyPhotos {
                count: draft.image_uris.len(),
                limit: self.max_photos,
            });
        }

        // 2. Location
        let location = draft
            .coordinates
            .map(|(lat, lon)| Location::new(lat, lon).map_err(TravelogError::InvalidLocation))
            .transpose()?;

        // 3. Address: explicit label, else geocoded, else empty
        let address = match (draft.address, location) {
            (Some(label), _) => label.trim().to_string(),
            (None, Some(location)) => resolve_address(self.geocoder, location),
            (None, None) => String::new(),
        };

        let description = draft
            .description
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        // 4. Id from the creation instant, unique among stored entries
        let taken: HashSet<String> = self
            .entries
            .load_all()
            .into_iter()
            .map(|entry| entry.id)
            .collect();
        let id = next_free_id(now.timestamp_millis(), &taken);

        let entry = Entry {
            id,
            image_uris: draft.image_uris,
            description,
            address,
            timestamp: format_display(now),
            location,
        };

        // 5. Persist, then notify
        self.entries.append(entry.clone())?;
        info!(id = %entry.id, photos = entry.image_uris.len(), "entry added");
        self.notifier.notify(&Notification::entry_added());

        Ok(entry)
    }
}

fn next_free_id(mut millis: i64, taken: &HashSet<String>) -> String {
    loop {
        let candidate = millis.to_string();
        if !taken.contains(&candidate) {
            return candidate;
        }
        millis += 1;
    }
}
