//! Liked-id store backed by the `likedPosts` blob

use crate::error::Result;
use crate::infrastructure::storage::{load_json, save_json, KeyValueStore, LIKED_KEY};
use std::collections::HashSet;

/// Set of liked entry ids. Ids need not refer to an existing entry.
#[derive(Debug)]
pub struct LikedStore<S> {
    store: S,
    liked: Vec<String>,
}

impl<S: KeyValueStore> LikedStore<S> {
    /// Open the store and load the mirror from storage
    pub fn open(store: S) -> Self {
        let liked = Self::load(&store);
        LikedStore { store, liked }
    }

    /// Replace the mirror with what is currently stored
    pub fn reload(&mut self) {
        self.liked = Self::load(&self.store);
    }

    /// Liked ids, in the order they were liked
    pub fn load_all(&self) -> &[String] {
        &self.liked
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.iter().any(|liked| liked == id)
    }

    /// Flip membership of `id` and persist. Returns the new membership.
    ///
    /// The mirror is updated before the write, so `is_liked` reflects the
    /// toggle even when persisting fails.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let now_liked = if self.is_liked(id) {
            self.liked.retain(|liked| liked != id);
            false
        } else {
            self.liked.push(id.to_string());
            true
        };

        save_json(&self.store, LIKED_KEY, &self.liked)?;
        Ok(now_liked)
    }

    fn load(store: &S) -> Vec<String> {
        let mut ids: Vec<String> = load_json(store, LIKED_KEY);
        let mut seen = HashSet::new();
        ids.retain(|id| seen.insert(id.clone()));
        ids
    }
}
