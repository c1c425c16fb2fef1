//! Great-circle distance and compass bearing between coordinates.
//!
//! Unlike the tangent-plane projection, these are frame-independent: they
//! work directly on the spherical-Earth model and stay accurate at any
//! separation.

use crate::core::constants::EARTH_RADIUS_M;
use crate::core::types::GeoCoordinate;

/// Great-circle distance between two coordinates using the Haversine
/// formula (meters).
///
/// Symmetric in its arguments, zero for identical points, and monotonic in
/// angular separation. Altitude is ignored.
pub fn haversine_distance(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Initial compass bearing from `a` to `b` in degrees, normalized to
/// [0, 360). 0 is north, 90 east. Returns 0 when the points coincide.
pub fn bearing(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let y = d_lon.sin() * lat_b.cos();
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * d_lon.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}
