//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "travelog")]
#[command(about = "Local travel diary: photos, places and memories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add an entry from one or more photos
    Add {
        /// Photo locators (paths or URIs), in display order
        #[arg(value_name = "IMAGE")]
        images: Vec<String>,

        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,

        /// Latitude of the capture position
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude of the capture position
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Location label; skips reverse geocoding
        #[arg(short, long)]
        address: Option<String>,
    },

    /// List entries, newest first
    List,

    /// Delete an entry from the home list
    Remove {
        /// Entry id
        id: String,
    },

    /// Save an entry to favorites, or remove it if already saved
    Save {
        /// Entry id
        id: String,
    },

    /// Remove an entry from favorites
    Unsave {
        /// Entry id
        id: String,
    },

    /// List saved entries by travel date, newest first
    Saved,

    /// Like an entry, or unlike it if already liked
    Like {
        /// Entry id
        id: String,
    },

    /// List liked entries
    Liked,

    /// Print the share message for an entry
    Share {
        /// Entry id
        id: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Switch between light and dark theme
    Theme,
}
