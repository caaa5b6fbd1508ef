//! Configuration management

use crate::domain::{MapType, DEFAULT_SPAN};
use crate::error::{PlacesError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub map_type: MapType,
    /// Degrees of latitude/longitude shown around a focused pin
    #[serde(default = "default_span")]
    pub span: f64,
    pub created: DateTime<Utc>,
}

fn default_span() -> f64 {
    DEFAULT_SPAN
}

impl Config {
    /// Create a new config with default values
    pub fn new(map_type: MapType) -> Self {
        Config {
            map_type,
            span: DEFAULT_SPAN,
            created: Utc::now(),
        }
    }

    /// Load config from .places/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".places").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PlacesError::NotPlacesDirectory(path.to_path_buf())
            } else {
                PlacesError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| PlacesError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .places/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let places_dir = path.join(".places");
        let config_path = places_dir.join("config.toml");

        if !places_dir.exists() {
            fs::create_dir(&places_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| PlacesError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Parse and check a span value
    pub fn parse_span(value: &str) -> Result<f64> {
        let span: f64 = value
            .trim()
            .parse()
            .map_err(|_| PlacesError::Config(format!("Invalid span: '{}'", value)))?;
        if !span.is_finite() || span <= 0.0 {
            return Err(PlacesError::Config(format!(
                "Invalid span: '{}'. Span must be a positive number of degrees",
                value
            )));
        }
        Ok(span)
    }
}
