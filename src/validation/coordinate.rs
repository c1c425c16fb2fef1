//! Boundary validation for geodetic input.
//!
//! The projection and metric functions themselves are infallible for finite
//! input, so validation happens once at the boundary (constructors, the
//! manual-override parser, the config loader) before values reach them.

use crate::core::types::GeoCoordinate;
use crate::validation::error::{GeoError, GeoResult};

/// Validate latitude/longitude ranges and that every field is finite
pub fn validate_coordinate(coord: &GeoCoordinate) -> GeoResult<()> {
    if !coord.latitude.is_finite() || coord.latitude < -90.0 || coord.latitude > 90.0 {
        return Err(GeoError::InvalidCoordinate {
            field: "latitude".to_string(),
            value: coord.latitude,
            reason: "must be finite and within [-90, 90] degrees".to_string(),
        });
    }

    if !coord.longitude.is_finite() || coord.longitude < -180.0 || coord.longitude > 180.0 {
        return Err(GeoError::InvalidCoordinate {
            field: "longitude".to_string(),
            value: coord.longitude,
            reason: "must be finite and within [-180, 180] degrees".to_string(),
        });
    }

    if !coord.altitude.is_finite() {
        return Err(GeoError::InvalidCoordinate {
            field: "altitude".to_string(),
            value: coord.altitude,
            reason: "must be finite".to_string(),
        });
    }

    if let Some(accuracy) = coord.accuracy {
        if !accuracy.is_finite() || accuracy < 0.0 {
            return Err(GeoError::InvalidCoordinate {
                field: "accuracy".to_string(),
                value: accuracy,
                reason: "must be finite and non-negative".to_string(),
            });
        }
    }

    Ok(())
}

/// Flag reference latitudes close enough to a pole that the east-axis scale
/// collapses. Not an error: the projection degrades toward zero east offset
/// there, which is outside the deployment envelope of human-scale outdoor
/// use, but callers that want to warn can check.
pub fn is_near_pole(latitude: f64) -> bool {
    latitude.abs() >= 89.9
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(lat: f64, lon: f64) -> GeoCoordinate {
        GeoCoordinate {
            latitude: lat,
            longitude: lon,
            altitude: 0.0,
            accuracy: None,
        }
    }

    #[test]
    fn test_range_boundaries_are_inclusive() {
        assert!(validate_coordinate(&raw(90.0, 180.0)).is_ok());
        assert!(validate_coordinate(&raw(-90.0, -180.0)).is_ok());
        assert!(validate_coordinate(&raw(90.001, 0.0)).is_err());
        assert!(validate_coordinate(&raw(0.0, -180.001)).is_err());
    }

    #[test]
    fn test_non_finite_fields_rejected() {
        assert!(validate_coordinate(&raw(f64::INFINITY, 0.0)).is_err());
        assert!(validate_coordinate(&raw(0.0, f64::NAN)).is_err());

        let mut coord = raw(0.0, 0.0);
        coord.altitude = f64::NAN;
        assert!(validate_coordinate(&coord).is_err());

        let mut coord = raw(0.0, 0.0);
        coord.accuracy = Some(f64::INFINITY);
        assert!(validate_coordinate(&coord).is_err());
    }

    #[test]
    fn test_pole_proximity() {
        assert!(is_near_pole(90.0));
        assert!(is_near_pole(-89.95));
        assert!(!is_near_pole(-23.978699));
    }
}
