//! Geodesic-to-scene geometry: projection, distance and bearing

pub mod metrics;
pub mod projection;

pub use metrics::{bearing, haversine_distance};
pub use projection::GeoProjector;
