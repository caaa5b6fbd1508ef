//! Config management use case

use crate::domain::MapType;
use crate::error::{PlacesError, Result};
use crate::infrastructure::{Config, FileSystemRepository, PlacesRepository};
use std::str::FromStr;

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "map_type" => Ok(config.map_type.to_string()),
            "span" => Ok(config.span.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(PlacesError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: map_type, span, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "map_type" => {
                config.map_type = MapType::from_str(value).map_err(PlacesError::Config)?;
            }
            "span" => {
                config.span = Config::parse_span(value)?;
            }
            "created" => {
                return Err(PlacesError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(PlacesError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: map_type, span",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        tracing::debug!(key, value, "updated config");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
