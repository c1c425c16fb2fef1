use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for placement-core operations
pub type GeoResult<T> = Result<T, GeoError>;

/// Error classification for the placement core.
///
/// All operations are deterministic numeric transforms, so every failure is
/// a local validation rejection surfaced synchronously; nothing is retried
/// or silently downgraded to a warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeoError {
    /// Latitude/longitude out of range, or a non-finite field
    InvalidCoordinate {
        field: String,
        value: f64,
        reason: String,
    },
    /// Base scale that is zero, negative or non-finite
    InvalidScale { value: f64 },
    /// Tracked object id already registered
    DuplicateObjectId { id: String },
    /// Tracked object id not registered
    UnknownObjectId { id: String },
    /// Manual-override text that does not parse as coordinates
    ParseError { input: String, reason: String },
    /// Configuration parameter outside its valid range
    ConfigError {
        parameter: String,
        value: String,
        reason: String,
    },
    /// Configuration file I/O failure
    IoError { message: String },
    /// Configuration JSON (de)serialization failure
    SerializationError { message: String },
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::InvalidCoordinate {
                field,
                value,
                reason,
            } => write!(f, "Invalid coordinate {}: {} ({})", field, value, reason),
            GeoError::InvalidScale { value } => {
                write!(f, "Invalid scale {}: must be finite and positive", value)
            }
            GeoError::DuplicateObjectId { id } => {
                write!(f, "Tracked object '{}' is already registered", id)
            }
            GeoError::UnknownObjectId { id } => {
                write!(f, "No tracked object registered as '{}'", id)
            }
            GeoError::ParseError { input, reason } => {
                write!(f, "Cannot parse coordinates from '{}': {}", input, reason)
            }
            GeoError::ConfigError {
                parameter,
                value,
                reason,
            } => write!(
                f,
                "Invalid configuration {} = {}: {}",
                parameter, value, reason
            ),
            GeoError::IoError { message } => write!(f, "Configuration I/O error: {}", message),
            GeoError::SerializationError { message } => {
                write!(f, "Configuration serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for GeoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeoError::InvalidCoordinate {
            field: "latitude".to_string(),
            value: 91.0,
            reason: "outside [-90, 90]".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid coordinate latitude: 91 (outside [-90, 90])"
        );

        let err = GeoError::ParseError {
            input: "abc".to_string(),
            reason: "latitude is not a number".to_string(),
        };
        assert!(err.to_string().contains("abc"));
    }
}
