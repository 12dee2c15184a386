//! Saved-entry store backed by the `savedPosts` blob

use crate::domain::timestamp::{format_saved_at, newest_first_key};
use crate::domain::{Entry, SavedEntry};
use crate::error::Result;
use crate::infrastructure::storage::{load_json, save_json, KeyValueStore, SAVED_KEY};
use chrono::{DateTime, Utc};

/// Snapshots of saved entries, most recently saved first.
///
/// The in-memory mirror is authoritative: mutations update it first and
/// then persist the whole mirror. A failed write leaves the mirror ahead
/// of the stored blob until the next successful write.
#[derive(Debug)]
pub struct SavedStore<S> {
    store: S,
    saved: Vec<SavedEntry>,
}

impl<S: KeyValueStore> SavedStore<S> {
    /// Open the store and load the mirror from storage
    pub fn open(store: S) -> Self {
        let saved = load_json(&store, SAVED_KEY);
        SavedStore { store, saved }
    }

    /// Replace the mirror with what is currently stored
    pub fn reload(&mut self) {
        self.saved = load_json(&self.store, SAVED_KEY);
    }

    /// Saved snapshots, most recently saved first
    pub fn load_all(&self) -> &[SavedEntry] {
        &self.saved
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.iter().any(|saved| saved.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&SavedEntry> {
        self.saved.iter().find(|saved| saved.id() == id)
    }

    /// Save a snapshot of `entry`, stamped with the current instant
    pub fn save(&mut self, entry: Entry) -> Result<()> {
        self.save_at(entry, Utc::now())
    }

    /// Save a snapshot with an explicit save instant.
    /// Re-saving an already saved id replaces the older snapshot.
    pub fn save_at(&mut self, entry: Entry, saved_at: DateTime<Utc>) -> Result<()> {
        self.saved.retain(|saved| saved.id() != entry.id);
        self.saved
            .insert(0, SavedEntry::new(entry, format_saved_at(saved_at)));
        self.persist()
    }

    /// Remove the snapshot with `id`. Returns whether it was saved.
    pub fn unsave(&mut self, id: &str) -> Result<bool> {
        let before = self.saved.len();
        self.saved.retain(|saved| saved.id() != id);
        let removed = self.saved.len() != before;
        self.persist()?;
        Ok(removed)
    }

    /// Saved listing ordered by each entry's original timestamp, newest
    /// first. Ties and unparseable timestamps keep mirror order.
    pub fn sorted_by_timestamp(&self) -> Vec<&SavedEntry> {
        let mut sorted: Vec<&SavedEntry> = self.saved.iter().collect();
        sorted.sort_by_cached_key(|saved| newest_first_key(&saved.entry.timestamp));
        sorted
    }

    fn persist(&self) -> Result<()> {
        save_json(&self.store, SAVED_KEY, &self.saved)
    }
}
