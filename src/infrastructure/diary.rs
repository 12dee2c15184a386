//! The three stores of one diary, opened together

use crate::infrastructure::{EntryRepository, KeyValueStore, LikedStore, SavedStore};

/// Entry repository plus saved and liked stores over one persistence
/// primitive. Constructed once and passed to whatever needs it; the stores
/// never coordinate with each other.
#[derive(Debug)]
pub struct Diary<S> {
    pub entries: EntryRepository<S>,
    pub saved: SavedStore<S>,
    pub liked: LikedStore<S>,
}

impl<S: KeyValueStore + Clone> Diary<S> {
    /// Open every store, loading the saved and liked mirrors
    pub fn open(store: S) -> Self {
        Diary {
            entries: EntryRepository::new(store.clone()),
            saved: SavedStore::open(store.clone()),
            liked: LikedStore::open(store),
        }
    }
}
