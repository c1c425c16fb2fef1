//! Input validation and error types

pub mod coordinate;
pub mod error;

pub use coordinate::{is_near_pole, validate_coordinate};
pub use error::{GeoError, GeoResult};
