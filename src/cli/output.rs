//! Output formatting utilities

use crate::application::TourStop;
use crate::domain::{Pin, Region};

/// Format saved pins as numbered rows, 1-based
pub fn format_pin_list(pins: &[Pin]) -> String {
    if pins.is_empty() {
        return "No pins saved".to_string();
    }

    let mut output = String::new();
    for (i, pin) in pins.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {}  ({})  {}\n",
            i + 1,
            pin.title,
            pin.subtitle,
            format_coordinate(pin.latitude, pin.longitude)
        ));
    }
    output
}

pub fn format_coordinate(latitude: f64, longitude: f64) -> String {
    format!("{:.5}, {:.5}", latitude, longitude)
}

pub fn format_region(region: &Region) -> String {
    format!(
        "center {}  span {} x {}",
        format_coordinate(region.center.latitude, region.center.longitude),
        region.latitude_delta,
        region.longitude_delta
    )
}

pub fn format_tour(stops: &[TourStop]) -> String {
    if stops.is_empty() {
        return "No pins saved".to_string();
    }

    let mut output = String::new();
    for stop in stops {
        output.push_str(&format!(
            "{:>3}  {}  {}\n",
            stop.row + 1,
            stop.title,
            format_region(&stop.region)
        ));
    }
    output
}
