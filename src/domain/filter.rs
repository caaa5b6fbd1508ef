//! Equality filters over pin fields
//!
//! A filter is a list of field conditions joined with logical AND. The empty
//! filter matches every pin.

use crate::domain::Pin;

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Title(String),
    Subtitle(String),
    Latitude(f64),
    Longitude(f64),
}

impl Condition {
    fn holds(&self, pin: &Pin) -> bool {
        match self {
            Condition::Title(title) => pin.title == *title,
            Condition::Subtitle(subtitle) => pin.subtitle == *subtitle,
            Condition::Latitude(latitude) => pin.latitude == *latitude,
            Condition::Longitude(longitude) => pin.longitude == *longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PinFilter {
    conditions: Vec<Condition>,
}

impl PinFilter {
    /// Filter that matches everything
    pub fn all() -> Self {
        PinFilter::default()
    }

    /// Four-field match: title AND subtitle AND latitude AND longitude
    pub fn matching(pin: &Pin) -> Self {
        PinFilter::all()
            .and(Condition::Title(pin.title.clone()))
            .and(Condition::Subtitle(pin.subtitle.clone()))
            .and(Condition::Latitude(pin.latitude))
            .and(Condition::Longitude(pin.longitude))
    }

    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn matches(&self, pin: &Pin) -> bool {
        self.conditions.iter().all(|c| c.holds(pin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_anything() {
        let filter = PinFilter::all();
        assert!(filter.matches(&Pin::new("A", "B", 0.0, 0.0)));
    }

    #[test]
    fn test_matching_requires_every_field() {
        let pin = Pin::new("Cafe", "Good coffee", 51.5, -0.1);
        let filter = PinFilter::matching(&pin);

        assert!(filter.matches(&pin));
        assert!(!filter.matches(&pin.relabeled("Cafe", "Bad coffee")));
        assert!(!filter.matches(&pin.relabeled("Bar", "Good coffee")));
        assert!(!filter.matches(&Pin::new("Cafe", "Good coffee", 51.5, -0.2)));
        assert!(!filter.matches(&Pin::new("Cafe", "Good coffee", 51.6, -0.1)));
    }

    #[test]
    fn test_single_condition() {
        let filter = PinFilter::all().and(Condition::Title("Cafe".to_string()));
        assert!(filter.matches(&Pin::new("Cafe", "x", 1.0, 1.0)));
        assert!(filter.matches(&Pin::new("Cafe", "y", 2.0, 2.0)));
        assert!(!filter.matches(&Pin::new("cafe", "x", 1.0, 1.0)));
    }
}
