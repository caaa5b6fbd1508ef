//! Initialize places workspace use case

use crate::domain::MapType;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, PlacesRepository};
use std::fs;
use std::path::Path;

/// Initialize a new places workspace at the specified path.
pub fn init(path: &Path, map_type: MapType) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Creates .places/ and an empty pins.toml
    repo.initialize()?;

    let config = Config::new(map_type);
    repo.save_config(&config)?;

    tracing::info!(root = %path.display(), "initialized places workspace");
    println!("Initialized places at {}", path.display());
    println!("Map type: {}", map_type);

    Ok(())
}
