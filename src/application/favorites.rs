//! Save, like and share use cases

use crate::domain::Entry;
use crate::error::{Result, TravelogError};
use crate::infrastructure::{Diary, KeyValueStore};

/// Result of toggling the saved state of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Removed,
}

/// Service for the saved and liked collections of a diary
pub struct FavoritesService<'a, S> {
    diary: &'a mut Diary<S>,
}

impl<'a, S: KeyValueStore> FavoritesService<'a, S> {
    pub fn new(diary: &'a mut Diary<S>) -> Self {
        FavoritesService { diary }
    }

    /// Save a snapshot of the entry, or drop the snapshot if it is
    /// already saved.
    pub fn toggle_saved(&mut self, id: &str) -> Result<SaveOutcome> {
        if self.diary.saved.is_saved(id) {
            self.diary.saved.unsave(id)?;
            return Ok(SaveOutcome::Removed);
        }

        let entry = self.find_entry(id)?;
        self.diary.saved.save(entry)?;
        Ok(SaveOutcome::Saved)
    }

    /// Remove a saved snapshot; the entry itself is untouched
    pub fn unsave(&mut self, id: &str) -> Result<()> {
        if !self.diary.saved.unsave(id)? {
            return Err(TravelogError::EntryNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Flip the liked state of an id. Returns the new state.
    pub fn toggle_like(&mut self, id: &str) -> Result<bool> {
        self.diary.liked.toggle(id)
    }

    /// Share text for an entry, looked up in the entry list first and the
    /// saved snapshots second
    pub fn share_message(&self, id: &str) -> Result<String> {
        if let Some(entry) = self.diary.entries.find(id) {
            return Ok(entry.share_message());
        }
        self.diary
            .saved
            .get(id)
            .map(|saved| saved.entry.share_message())
            .ok_or_else(|| TravelogError::EntryNotFound(id.to_string()))
    }

    fn find_entry(&self, id: &str) -> Result<Entry> {
        self.diary
            .entries
            .find(id)
            .ok_or_else(|| TravelogError::EntryNotFound(id.to_string()))
    }
}
