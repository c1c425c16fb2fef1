//! GPS to local tangent-plane projection.
//!
//! A small patch of the Earth's surface is treated as flat: latitude and
//! longitude deltas scale linearly into meters, the east axis shrinking
//! with `cos(reference latitude)`. The approximation is intentional; at the
//! 10-1000 m ranges a GPS-anchored scene works over, its error is far below
//! GPS fix accuracy, and it avoids ellipsoidal geodesy the domain does not
//! need. The inverse mapping uses the same constants, so round trips close
//! to machine precision.
//!
//! Known limitation: at a polar reference the east-axis scale collapses and
//! the projection degrades toward zero east offset. This is documented
//! rather than guarded; see `validation::is_near_pole`.

use crate::core::constants::METERS_PER_DEGREE;
use crate::core::types::{GeoCoordinate, LocalOffset};

/// Bidirectional mapping between geodetic coordinates and a local
/// tangent-plane frame centered on a reference point.
///
/// Stateless; both directions are pure functions of their arguments and
/// always succeed for finite input.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoProjector;

impl GeoProjector {
    pub fn new() -> Self {
        Self
    }

    /// Project a target coordinate into the tangent-plane frame centered on
    /// `reference`.
    ///
    /// East displacement lands in `x`, the altitude delta in `y`, and the
    /// north displacement is negated into `z` for a camera-faces(-Z) scene.
    pub fn to_local(&self, reference: &GeoCoordinate, target: &GeoCoordinate) -> LocalOffset {
        let d_lat = target.latitude - reference.latitude;
        let d_lon = target.longitude - reference.longitude;

        let x = d_lon * METERS_PER_DEGREE * reference.latitude.to_radians().cos();
        let z = -d_lat * METERS_PER_DEGREE;
        let y = target.altitude - reference.altitude;

        LocalOffset::new(x, y, z)
    }

    /// Invert `to_local`: recover the geodetic coordinate a local offset
    /// points at.
    pub fn to_geo(&self, reference: &GeoCoordinate, offset: &LocalOffset) -> GeoCoordinate {
        let d_lat = -offset.z / METERS_PER_DEGREE;
        let d_lon = offset.x / (METERS_PER_DEGREE * reference.latitude.to_radians().cos());

        GeoCoordinate {
            latitude: reference.latitude + d_lat,
            longitude: reference.longitude + d_lon,
            altitude: reference.altitude + offset.y,
            accuracy: None,
        }
    }
}
