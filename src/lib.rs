//! GPS-anchored scene placement core
//!
//! Converts geodetic coordinates into local tangent-plane offsets and
//! decides per-object visibility and scale, so a rendering host can keep
//! world-anchored content positioned as the user's device moves. The
//! geometry is a deliberate small-angle approximation sized for the
//! 10-1000 m ranges of location-based AR; there is no drift correction and
//! no persisted world origin.

pub mod api;
pub mod core;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use crate::api::{
    format_coordinate, format_distance, CsvFormatter, JsonFormatter, ObjectPlacement,
    PlacementSink, RecordingSink, TextFormatter,
};
pub use crate::core::{
    GeoCoordinate, LocalOffset, ObjectKind, ReferenceFrame, TrackedObject, EARTH_RADIUS_M,
    METERS_PER_DEGREE,
};
pub use crate::geometry::{bearing, haversine_distance, GeoProjector};
pub use crate::input::{parse_override, FixResolver, FixSource, GpsFix};
pub use crate::scene::{ObjectTracker, VisibilityPolicy};
pub use crate::utils::{GpsSettings, ObjectConfig, SceneConfig};
pub use crate::validation::{GeoError, GeoResult};
