//! Domain layer - Diary records and their ordering rules

pub mod entry;
pub mod theme;
pub mod timestamp;

pub use entry::{Entry, Location, SavedEntry};
pub use theme::Theme;
