//! Error types for places

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for places application
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("Not a places directory: {0}")]
    NotPlacesDirectory(PathBuf),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Pin not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PlacesError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PlacesError::NotPlacesDirectory(_) => 2,
            PlacesError::NotFound(_) => 3,
            PlacesError::ValidationFailed(_) => 4,
            PlacesError::StorageUnavailable(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PlacesError::NotPlacesDirectory(path) => {
                format!(
                    "Not a places directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'places init' in this directory to create a new pin store\n\
                    • Navigate to an existing places directory\n\
                    • Set PLACES_ROOT environment variable to your places path",
                    path.display()
                )
            }
            PlacesError::NotFound(what) => {
                format!(
                    "Pin not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'places list' to see saved pins and their row numbers\n\
                    • Rows start at 1",
                    what
                )
            }
            PlacesError::ValidationFailed(msg) => {
                format!(
                    "{}\n\n\
                    A pin needs a title, a subtitle and finite coordinates.\n\
                    Example: places add \"Cafe\" \"Good coffee\" --lat 51.5 --lon -0.1",
                    msg
                )
            }
            PlacesError::StorageUnavailable(msg) => {
                format!(
                    "Storage unavailable: {}\n\n\
                    Suggestions:\n\
                    • Check that .places/pins.toml is readable and writable\n\
                    • Fix or remove a corrupted pins.toml (saved pins will be lost)",
                    msg
                )
            }
            PlacesError::Config(msg) => {
                if msg.contains("Invalid map type") {
                    format!(
                        "{}\n\n\
                        Valid map types: standard, satellite, hybrid\n\
                        Example: places config map_type satellite",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PlacesError
pub type Result<T> = std::result::Result<T, PlacesError>;
