//! Map display modes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the map layer renders its tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    #[default]
    Standard,
    Satellite,
    Hybrid,
}

impl FromStr for MapType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(MapType::Standard),
            "satellite" => Ok(MapType::Satellite),
            "hybrid" => Ok(MapType::Hybrid),
            _ => Err(format!(
                "Invalid map type: {}. Valid types: standard, satellite, hybrid",
                s
            )),
        }
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MapType::Standard => "standard",
            MapType::Satellite => "satellite",
            MapType::Hybrid => "hybrid",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_map_type() {
        assert_eq!(MapType::from_str("standard").unwrap(), MapType::Standard);
        assert_eq!(MapType::from_str("SATELLITE").unwrap(), MapType::Satellite);
        assert_eq!(MapType::from_str("Hybrid").unwrap(), MapType::Hybrid);
    }

    #[test]
    fn test_parse_invalid_map_type() {
        let err = MapType::from_str("terrain").unwrap_err();
        assert!(err.contains("Invalid map type"));
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(MapType::Satellite.to_string(), "satellite");
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(MapType::default(), MapType::Standard);
    }
}
