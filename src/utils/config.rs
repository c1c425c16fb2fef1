//! Scene configuration: fallback location, GPS intake settings, visibility
//! thresholds and the tracked-object list.
//!
//! One explicit struct, resolved at application startup and passed into the
//! core; the library never reads ambient or global state. Persisted as
//! JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::types::{GeoCoordinate, ObjectKind, TrackedObject};
use crate::scene::visibility::VisibilityPolicy;
use crate::validation::error::{GeoError, GeoResult};

/// GPS intake settings the host passes to its location hardware, plus the
/// accuracy gate the core's fix resolver applies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsSettings {
    /// Ask the hardware for high-accuracy fixes
    pub enable_high_accuracy: bool,
    /// Give up waiting for a fix after this long (milliseconds)
    pub timeout_ms: u32,
    /// Accept cached fixes up to this old (milliseconds)
    pub maximum_age_ms: u32,
    /// Discard fixes reporting worse accuracy than this (meters)
    pub min_accuracy_m: f64,
}

impl Default for GpsSettings {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms: 10_000,
            maximum_age_ms: 60_000,
            min_accuracy_m: 10.0,
        }
    }
}

/// One tracked object as configured, before registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectConfig {
    pub id: String,
    /// Display name for info panels
    pub name: String,
    pub kind: ObjectKind,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: f64,
    pub scale: f64,
}

impl ObjectConfig {
    /// Validate and convert into a tracked object
    pub fn to_tracked_object(&self) -> GeoResult<TrackedObject> {
        let coordinate = GeoCoordinate::with_altitude(self.latitude, self.longitude, self.altitude)?;
        TrackedObject::new(self.id.clone(), coordinate, self.scale, self.kind)
    }
}

/// Complete scene configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Reference coordinate used until a live fix is accepted
    pub fallback_location: GeoCoordinate,
    pub gps: GpsSettings,
    pub visibility: VisibilityPolicy,
    pub objects: Vec<ObjectConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        // The demo scene: a model and an info label near the Santos
        // waterfront, plus a landmark marker in central São Paulo
        let fallback_location = GeoCoordinate {
            latitude: -23.978699193445298,
            longitude: -46.31663867703862,
            altitude: 0.0,
            accuracy: None,
        };

        Self {
            fallback_location,
            gps: GpsSettings::default(),
            visibility: VisibilityPolicy::default(),
            objects: vec![
                ObjectConfig {
                    id: "trozoba-model".to_string(),
                    name: "Trozoba".to_string(),
                    kind: ObjectKind::Model,
                    latitude: -23.978699193445298,
                    longitude: -46.31663867703862,
                    altitude: 0.0,
                    scale: 5.0,
                },
                ObjectConfig {
                    id: "info-panel".to_string(),
                    name: "Info Panel".to_string(),
                    kind: ObjectKind::Label,
                    latitude: -23.5506,
                    longitude: -46.6334,
                    altitude: 0.0,
                    scale: 2.0,
                },
                ObjectConfig {
                    id: "landmark-1".to_string(),
                    name: "Landmark 1".to_string(),
                    kind: ObjectKind::Marker,
                    latitude: -23.5504,
                    longitude: -46.6332,
                    altitude: 0.0,
                    scale: 3.0,
                },
            ],
        }
    }
}

impl SceneConfig {
    /// Load and validate a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> GeoResult<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| GeoError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: SceneConfig =
            serde_json::from_str(&content).map_err(|e| GeoError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> GeoResult<()> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(self).map_err(|e| GeoError::SerializationError {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| GeoError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })
    }

    /// Check every field: the fallback coordinate, GPS thresholds, the
    /// visibility policy, and each object entry including id uniqueness
    pub fn validate(&self) -> GeoResult<()> {
        self.fallback_location.validate()?;
        self.visibility.validate()?;

        if !self.gps.min_accuracy_m.is_finite() || self.gps.min_accuracy_m <= 0.0 {
            return Err(GeoError::ConfigError {
                parameter: "gps.min_accuracy_m".to_string(),
                value: self.gps.min_accuracy_m.to_string(),
                reason: "must be finite and positive".to_string(),
            });
        }

        for (index, object) in self.objects.iter().enumerate() {
            if object.id.is_empty() {
                return Err(GeoError::ConfigError {
                    parameter: format!("objects[{}].id", index),
                    value: String::new(),
                    reason: "object id must not be empty".to_string(),
                });
            }
            object.to_tracked_object()?;
        }

        let mut ids: Vec<&str> = self.objects.iter().map(|o| o.id.as_str()).collect();
        ids.sort_unstable();
        if let Some(duplicate) = ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(GeoError::DuplicateObjectId {
                id: duplicate[0].to_string(),
            });
        }

        Ok(())
    }

    /// Convert every object entry, preserving configuration order
    pub fn tracked_objects(&self) -> GeoResult<Vec<TrackedObject>> {
        self.objects.iter().map(|o| o.to_tracked_object()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SceneConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tracked_objects().unwrap().len(), 3);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SceneConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_duplicate_object_ids_rejected() {
        let mut config = SceneConfig::default();
        let mut copy = config.objects[0].clone();
        copy.name = "Copy".to_string();
        config.objects.push(copy);
        assert!(matches!(
            config.validate(),
            Err(GeoError::DuplicateObjectId { .. })
        ));
    }

    #[test]
    fn test_invalid_object_coordinate_rejected() {
        let mut config = SceneConfig::default();
        config.objects[0].latitude = 123.0;
        assert!(matches!(
            config.validate(),
            Err(GeoError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_invalid_gps_threshold_rejected() {
        let mut config = SceneConfig::default();
        config.gps.min_accuracy_m = 0.0;
        assert!(matches!(config.validate(), Err(GeoError::ConfigError { .. })));
    }

    #[test]
    fn test_missing_file_reports_io_error() {
        let result = SceneConfig::from_file("/nonexistent/scene.json");
        assert!(matches!(result, Err(GeoError::IoError { .. })));
    }

    #[test]
    fn test_object_kind_serializes_lowercase() {
        let json = serde_json::to_string(&SceneConfig::default()).unwrap();
        assert!(json.contains("\"model\""));
        assert!(json.contains("\"label\""));
        assert!(json.contains("\"marker\""));
    }
}
