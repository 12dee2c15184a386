//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod favorites;
pub mod init;
pub mod list_entries;
pub mod manage_config;

pub use add_entry::{AddEntryService, EntryDraft};
pub use favorites::{FavoritesService, SaveOutcome};
pub use list_entries::{list_entries, list_liked, list_saved, EntryView};
pub use manage_config::ConfigService;
