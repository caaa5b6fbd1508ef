//! places - Map pin store
//!
//! Keeps a list of named map pins in a local store and in memory, in step
//! with each other, for a map view and a list view to display.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PlacesError;
