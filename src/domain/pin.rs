//! Pin entity and the display points derived from it

use crate::error::{PlacesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, located point.
///
/// Pins have no identity of their own: two pins with the same title,
/// subtitle and coordinates are the same pin as far as callers can tell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub title: String,
    pub subtitle: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Pin {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Pin {
            title: title.into(),
            subtitle: subtitle.into(),
            latitude,
            longitude,
        }
    }

    /// Same location with new labels
    pub fn relabeled(&self, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Pin::new(title, subtitle, self.latitude, self.longitude)
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Check that the pin may be persisted: title and subtitle must both
    /// carry text and both coordinates must be finite. Coordinates are not
    /// range checked.
    pub fn validate(&self) -> Result<()> {
        validate_labels(&self.title, &self.subtitle)?;
        // NaN never compares equal, so such a pin could never be matched again
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(PlacesError::ValidationFailed(format!(
                "Coordinates must be finite numbers, got ({}, {})",
                self.latitude, self.longitude
            )));
        }
        Ok(())
    }

    pub fn to_annotation(&self) -> Annotation {
        Annotation {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            coordinate: self.coordinate(),
        }
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' / '{}' at ({}, {})",
            self.title, self.subtitle, self.latitude, self.longitude
        )
    }
}

/// Validate a title/subtitle pair before it reaches storage
pub fn validate_labels(title: &str, subtitle: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(PlacesError::ValidationFailed(
            "Title must not be empty".to_string(),
        ));
    }
    if subtitle.trim().is_empty() {
        return Err(PlacesError::ValidationFailed(
            "Subtitle must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Point handed to the map layer
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub title: String,
    pub subtitle: String,
    pub coordinate: Coordinate,
}

/// Convert pins to map annotations, preserving order
pub fn annotations<'a>(pins: impl IntoIterator<Item = &'a Pin>) -> Vec<Annotation> {
    pins.into_iter().map(Pin::to_annotation).collect()
}
