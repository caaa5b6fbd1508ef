//! Focus regions for the map layer

use crate::domain::Coordinate;

/// Span used when the config does not say otherwise, in degrees
pub const DEFAULT_SPAN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    /// Square region of `span` degrees centered on `center`
    pub fn around(center: Coordinate, span: f64) -> Self {
        Region {
            center,
            latitude_delta: span,
            longitude_delta: span,
        }
    }
}
