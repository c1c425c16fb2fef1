//! Physical constants and projection parameters

/// Mean Earth radius used by the great-circle distance formula (meters)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters per degree of latitude at the equator.
///
/// The tangent-plane projection is a linear small-angle approximation; this
/// constant carries no ellipsoid correction, which keeps the error budget
/// acceptable at the 10-1000 m ranges the placement core targets.
pub const METERS_PER_DEGREE: f64 = 111_320.0;
