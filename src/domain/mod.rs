//! Domain layer - Pins and the values derived from them

pub mod cursor;
pub mod filter;
pub mod map_type;
pub mod pin;
pub mod region;

pub use cursor::{Direction, PinCursor};
pub use filter::{Condition, PinFilter};
pub use map_type::MapType;
pub use pin::{annotations, validate_labels, Annotation, Coordinate, Pin};
pub use region::{Region, DEFAULT_SPAN};
