//! travelog - Local travel diary
//!
//! Stores diary entries (photos, description, place, time) together with
//! the user's saved snapshots and liked ids, each persisted as a JSON blob
//! under its own key.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TravelogError;
