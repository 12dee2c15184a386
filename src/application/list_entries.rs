//! List entries use case

use crate::domain::{Entry, SavedEntry};
use crate::infrastructure::{Diary, KeyValueStore};

/// An entry as shown in the home listing
#[derive(Debug, Clone, PartialEq)]
pub struct EntryView {
    pub entry: Entry,
    pub liked: bool,
    pub saved: bool,
}

/// Home listing: every entry, newest first, with its like/save markers
pub fn list_entries<S: KeyValueStore>(diary: &Diary<S>) -> Vec<EntryView> {
    diary
        .entries
        .load_all()
        .into_iter()
        .map(|entry| EntryView {
            liked: diary.liked.is_liked(&entry.id),
            saved: diary.saved.is_saved(&entry.id),
            entry,
        })
        .collect()
}

/// Saved listing, ordered by original entry timestamp, newest first
pub fn list_saved<S: KeyValueStore>(diary: &Diary<S>) -> Vec<&SavedEntry> {
    diary.saved.sorted_by_timestamp()
}

/// Liked ids that still refer to an entry, in the order they were liked
pub fn list_liked<S: KeyValueStore>(diary: &Diary<S>) -> Vec<Entry> {
    let entries = diary.entries.load_all();
    diary
        .liked
        .load_all()
        .iter()
        .filter_map(|id| entries.iter().find(|entry| &entry.id == id).cloned())
        .collect()
}
