//! Application layer - Use cases and orchestration

pub mod edit_pin;
pub mod init;
pub mod manage_config;
pub mod pin_store;
pub mod tour;

pub use edit_pin::{EditForm, PinEdit};
pub use manage_config::ConfigService;
pub use pin_store::PinStore;
pub use tour::{tour, TourStop};
