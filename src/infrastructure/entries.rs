//! Entry repository backed by the `travel_entries` blob

use crate::domain::Entry;
use crate::error::{Result, TravelogError};
use crate::infrastructure::storage::{load_json, save_json, KeyValueStore, ENTRIES_KEY};
use tracing::debug;

/// Durable list of diary entries, newest first.
///
/// Holds no mirror: every operation reads the blob, so a write always
/// starts from the latest persisted list.
#[derive(Debug, Clone)]
pub struct EntryRepository<S> {
    store: S,
}

impl<S: KeyValueStore> EntryRepository<S> {
    pub fn new(store: S) -> Self {
        EntryRepository { store }
    }

    /// All entries, newest first; empty when absent or unreadable
    pub fn load_all(&self) -> Vec<Entry> {
        load_json(&self.store, ENTRIES_KEY)
    }

    /// Find a single entry by id
    pub fn find(&self, id: &str) -> Option<Entry> {
        self.load_all().into_iter().find(|entry| entry.id == id)
    }

    /// Prepend an entry and persist the full list.
    /// An id that is already stored is rejected and nothing is written.
    pub fn append(&self, entry: Entry) -> Result<()> {
        let mut entries = self.load_all();

        if entries.iter().any(|existing| existing.id == entry.id) {
            return Err(TravelogError::DuplicateEntry(entry.id));
        }

        debug!(id = %entry.id, "appending entry");
        entries.insert(0, entry);
        save_json(&self.store, ENTRIES_KEY, &entries)
    }

    /// Remove the entry with `id`. Returns whether anything was removed;
    /// removing an absent id writes nothing.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let mut entries = self.load_all();
        let before = entries.len();
        entries.retain(|entry| entry.id != id);

        if entries.len() == before {
            return Ok(false);
        }

        debug!(id, "removing entry");
        save_json(&self.store, ENTRIES_KEY, &entries)?;
        Ok(true)
    }
}
