//! GPS fix intake with accuracy gating and fallback.
//!
//! GPS acquisition itself (permissions, timeouts) belongs to the host; the
//! core only decides which coordinate to project from. A fix whose reported
//! accuracy is worse than the configured threshold is discarded in favor of
//! the last accepted one, and when nothing has ever been accepted the
//! caller-supplied fallback coordinate applies.

use serde::{Deserialize, Serialize};

use crate::core::types::GeoCoordinate;
use crate::validation::error::GeoResult;

/// One reading from the device location hardware
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsFix {
    pub coordinate: GeoCoordinate,
    /// Milliseconds since epoch, as reported by the host
    pub timestamp_ms: u64,
}

/// Why a fix resolution produced the coordinate it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixSource {
    /// The offered fix was accepted
    Live,
    /// The offered fix was rejected (or absent) and an earlier accepted fix
    /// is still in effect
    LastAccepted,
    /// Nothing has ever been accepted; the configured fallback applies
    Fallback,
}

/// Chooses the coordinate the projection should be centered on
#[derive(Debug, Clone)]
pub struct FixResolver {
    fallback: GeoCoordinate,
    min_accuracy_m: Option<f64>,
    last_accepted: Option<GpsFix>,
}

impl FixResolver {
    /// Create a resolver that accepts every valid fix
    pub fn new(fallback: GeoCoordinate) -> GeoResult<Self> {
        fallback.validate()?;
        Ok(Self {
            fallback,
            min_accuracy_m: None,
            last_accepted: None,
        })
    }

    /// Reject fixes whose reported accuracy is worse than `meters`. Fixes
    /// that report no accuracy are accepted as-is.
    pub fn with_min_accuracy(mut self, meters: f64) -> Self {
        self.min_accuracy_m = Some(meters);
        self
    }

    /// Resolve the current reference coordinate from an optional new fix
    pub fn resolve(&mut self, fix: Option<GpsFix>) -> (GeoCoordinate, FixSource) {
        if let Some(fix) = fix {
            if self.accepts(&fix) {
                self.last_accepted = Some(fix);
                return (fix.coordinate, FixSource::Live);
            }
        }

        match self.last_accepted {
            Some(fix) => (fix.coordinate, FixSource::LastAccepted),
            None => (self.fallback, FixSource::Fallback),
        }
    }

    /// The most recent accepted fix, if any
    pub fn last_accepted(&self) -> Option<&GpsFix> {
        self.last_accepted.as_ref()
    }

    fn accepts(&self, fix: &GpsFix) -> bool {
        if fix.coordinate.validate().is_err() {
            return false;
        }
        match (self.min_accuracy_m, fix.coordinate.accuracy) {
            (Some(threshold), Some(accuracy)) => accuracy <= threshold,
            _ => true,
        }
    }
}
