//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod diary;
pub mod entries;
pub mod geocoder;
pub mod liked;
pub mod notifier;
pub mod repository;
pub mod saved;
pub mod storage;

pub use config::Config;
pub use diary::Diary;
pub use entries::EntryRepository;
pub use geocoder::{resolve_address, OfflineGeocoder, Placemark, ReverseGeocoder};
pub use liked::LikedStore;
pub use notifier::{ConsoleNotifier, Notification, Notifier, SilentNotifier};
pub use repository::{DiaryRepository, FileSystemRepository};
pub use saved::SavedStore;
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
