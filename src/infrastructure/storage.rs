//! Named-blob persistence primitive and JSON helpers shared by the stores

use crate::error::{Result, TravelogError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, warn};

/// Key of the entry list blob
pub const ENTRIES_KEY: &str = "travel_entries";
/// Key of the saved-entry snapshot blob
pub const SAVED_KEY: &str = "savedPosts";
/// Key of the liked-id blob
pub const LIKED_KEY: &str = "likedPosts";

/// Get/set of named blobs, atomic per key
pub trait KeyValueStore {
    /// Read the blob stored under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the blob stored under `key`
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: PathBuf) -> Self {
        FileKeyValueStore { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(TravelogError::storage(key, "invalid storage key"));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

/// Distinguishes temp files of concurrent writes within one process
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key)?;

        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TravelogError::storage(key, e.to_string())),
        }
    }

    /// Writes to a temp file in the same directory, then renames into place,
    /// so readers never observe a torn blob.
    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| TravelogError::storage(key, e.to_string()))?;
        }

        let seq = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let tmp_path = self.dir.join(format!(
            "{}.json.travelog-tmp-{}-{}",
            key,
            std::process::id(),
            seq
        ));

        fs::write(&tmp_path, value).map_err(|e| TravelogError::storage(key, e.to_string()))?;

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(TravelogError::storage(key, e.to_string()));
        }

        Ok(())
    }
}

/// Process-local store, used by tests and embedders without a disk
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let blobs = self
            .blobs
            .lock()
            .map_err(|_| TravelogError::storage(key, "memory store lock poisoned"))?;
        Ok(blobs.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|_| TravelogError::storage(key, "memory store lock poisoned"))?;
        blobs.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Load a JSON value, failing closed: absent, unreadable or malformed
/// blobs all yield the default value.
pub fn load_json<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let bytes = match store.get(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return T::default(),
        Err(e) => {
            error!(key, error = %e, "failed to read stored data");
            return T::default();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "stored data is malformed, treating as empty");
            T::default()
        }
    }
}

/// Serialize a value to JSON and persist it under `key`
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let bytes = serde_json::to_vec(value)?;
    store.set(key, &bytes).inspect_err(|e| {
        error!(key, error = %e, "failed to persist data");
    })?;
    debug!(key, bytes = bytes.len(), "persisted");
    Ok(())
}
