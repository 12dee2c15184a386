//! Initialize diary use case

use crate::error::Result;
use crate::infrastructure::{Config, DiaryRepository, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new diary at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Creates .travelog/ and .travelog/store/
    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    println!("Initialized travelog diary at {}", path.display());

    Ok(())
}
