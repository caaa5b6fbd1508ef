//! Places workspace discovery and layout

use crate::error::{PlacesError, Result};
use crate::infrastructure::{Config, FileSystemStorage};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for a places workspace
pub trait PlacesRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .places/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .places/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .places directory exists
    fn is_initialized(&self) -> bool;

    /// Create .places directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of PlacesRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the workspace root.
    /// PLACES_ROOT wins when set; otherwise walk up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("PLACES_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_places_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(PlacesError::Config(format!(
                    "PLACES_ROOT is set to '{}' but no .places directory found. \
                    Run 'places init' in that directory or unset PLACES_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_places_dir(&current) {
                tracing::debug!(root = %current.display(), "found places workspace");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(PlacesError::NotPlacesDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_places_dir(path: &Path) -> bool {
        path.join(".places").is_dir()
    }

    /// Pin storage backed by this workspace's pins.toml
    pub fn storage(&self) -> FileSystemStorage {
        FileSystemStorage::new(&self.root)
    }
}

impl PlacesRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_places_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let places_dir = self.root.join(".places");

        if places_dir.exists() {
            return Err(PlacesError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&places_dir)?;
        self.storage().create()
    }
}
