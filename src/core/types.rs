//! Core data types for the placement system

use crate::validation::error::{GeoError, GeoResult};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Geodetic coordinate in decimal degrees with altitude in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in decimal degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180]
    pub longitude: f64,
    /// Altitude above the reference surface (meters)
    pub altitude: f64,
    /// Reported fix accuracy (meters), if the source provides one
    pub accuracy: Option<f64>,
}

impl GeoCoordinate {
    /// Create a validated coordinate at zero altitude
    pub fn new(latitude: f64, longitude: f64) -> GeoResult<Self> {
        Self::with_altitude(latitude, longitude, 0.0)
    }

    /// Create a validated coordinate with explicit altitude
    pub fn with_altitude(latitude: f64, longitude: f64, altitude: f64) -> GeoResult<Self> {
        let coord = Self {
            latitude,
            longitude,
            altitude,
            accuracy: None,
        };
        coord.validate()?;
        Ok(coord)
    }

    /// Attach a reported accuracy to the coordinate
    pub fn with_accuracy(mut self, accuracy: f64) -> GeoResult<Self> {
        if !accuracy.is_finite() || accuracy < 0.0 {
            return Err(GeoError::InvalidCoordinate {
                field: "accuracy".to_string(),
                value: accuracy,
                reason: "accuracy must be finite and non-negative".to_string(),
            });
        }
        self.accuracy = Some(accuracy);
        Ok(self)
    }

    /// Check latitude/longitude ranges and that every field is finite
    pub fn validate(&self) -> GeoResult<()> {
        crate::validation::coordinate::validate_coordinate(self)
    }
}

/// Offset from the reference point in the local tangent-plane frame.
///
/// `x` grows eastward and `y` upward. `z` carries the negated northward
/// displacement so the offset drops straight into a right-handed scene
/// where the camera faces -Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalOffset {
    /// East displacement (meters)
    pub x: f64,
    /// Vertical displacement from the altitude delta (meters)
    pub y: f64,
    /// Negated north displacement (meters)
    pub z: f64,
}

impl LocalOffset {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line length of the offset (meters)
    pub fn magnitude(&self) -> f64 {
        self.to_vector().norm()
    }

    /// Length of the offset ignoring the vertical component (meters)
    pub fn horizontal_magnitude(&self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn from_vector(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Kind of scene node a tracked object maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Loaded 3D model
    Model,
    /// Simple placeholder shape
    Marker,
    /// Text or info panel
    Label,
}

/// A world-anchored object the host application wants placed.
///
/// The coordinate is fixed for the session; only the derived offset and
/// effective scale change as the reference point moves. The core never
/// holds a rendering handle, only the geometric facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedObject {
    /// Unique identifier the host uses to address its scene node
    pub id: String,
    /// Fixed world position of the object
    pub coordinate: GeoCoordinate,
    /// Scale applied when the object is within normal viewing distance
    pub base_scale: f64,
    /// What the host renders for this object
    pub kind: ObjectKind,
}

impl TrackedObject {
    pub fn new(
        id: impl Into<String>,
        coordinate: GeoCoordinate,
        base_scale: f64,
        kind: ObjectKind,
    ) -> GeoResult<Self> {
        if !base_scale.is_finite() || base_scale <= 0.0 {
            return Err(GeoError::InvalidScale { value: base_scale });
        }
        coordinate.validate()?;
        Ok(Self {
            id: id.into(),
            coordinate,
            base_scale,
            kind,
        })
    }
}

/// The current projection origin: the user's position.
///
/// Every update invalidates all derived offsets. There is no persisted
/// world origin, so repeated reference changes reposition all tracked
/// objects; that is the documented behavior of a pure GPS-offset system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceFrame {
    /// Coordinate the projection is currently centered on
    pub origin: GeoCoordinate,
    /// Number of times the origin has been replaced
    pub revision: u64,
}

impl ReferenceFrame {
    pub fn new(origin: GeoCoordinate) -> GeoResult<Self> {
        origin.validate()?;
        Ok(Self {
            origin,
            revision: 0,
        })
    }

    /// Replace the origin, bumping the revision so cached offsets can be
    /// recognized as stale
    pub fn update(&mut self, origin: GeoCoordinate) -> GeoResult<()> {
        origin.validate()?;
        self.origin = origin;
        self.revision += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_construction() {
        let coord = GeoCoordinate::new(-23.978699, -46.316639).unwrap();
        assert_eq!(coord.altitude, 0.0);
        assert!(coord.accuracy.is_none());

        assert!(GeoCoordinate::new(91.0, 0.0).is_err());
        assert!(GeoCoordinate::new(0.0, 181.0).is_err());
        assert!(GeoCoordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_accuracy_must_be_non_negative() {
        let coord = GeoCoordinate::new(0.0, 0.0).unwrap();
        assert!(coord.with_accuracy(5.0).is_ok());

        let coord = GeoCoordinate::new(0.0, 0.0).unwrap();
        assert!(coord.with_accuracy(-1.0).is_err());
    }

    #[test]
    fn test_offset_magnitudes() {
        let offset = LocalOffset::new(3.0, 12.0, -4.0);
        assert!((offset.horizontal_magnitude() - 5.0).abs() < 1e-12);
        assert!((offset.magnitude() - 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_tracked_object_rejects_bad_scale() {
        let coord = GeoCoordinate::new(0.0, 0.0).unwrap();
        assert!(TrackedObject::new("a", coord, 0.0, ObjectKind::Marker).is_err());
        assert!(TrackedObject::new("a", coord, -2.0, ObjectKind::Marker).is_err());
        assert!(TrackedObject::new("a", coord, 5.0, ObjectKind::Model).is_ok());
    }

    #[test]
    fn test_reference_frame_revision_bumps() {
        let origin = GeoCoordinate::new(10.0, 20.0).unwrap();
        let mut frame = ReferenceFrame::new(origin).unwrap();
        assert_eq!(frame.revision, 0);

        let moved = GeoCoordinate::new(10.001, 20.0).unwrap();
        frame.update(moved).unwrap();
        assert_eq!(frame.revision, 1);
        assert_eq!(frame.origin, moved);
    }
}
