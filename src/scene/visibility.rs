//! Distance-based visibility and scale falloff.
//!
//! Distant objects shrink instead of popping, and objects beyond the
//! visibility cutoff are hidden outright regardless of scale. There is no
//! universal default threshold: every caller supplies its own, since the
//! sensible range spans two orders of magnitude (handheld demos use ~100 m,
//! landmark overlays up to 10 km).

use serde::{Deserialize, Serialize};

use crate::validation::error::{GeoError, GeoResult};

/// Decide whether an object at `distance` meters should be rendered at all
pub fn is_visible(distance: f64, max_distance: f64) -> bool {
    distance <= max_distance
}

/// Effective scale for an object at `distance` meters.
///
/// Within `max_normal_distance` the base scale is returned unchanged.
/// Beyond it the scale falls off with the inverse of distance
/// (`base_scale * max_normal_distance / distance`), clamped so it never
/// drops below `min_scale`. The curve is continuous at the knee, equal to
/// `base_scale` there, and monotonically non-increasing in distance.
pub fn scale_for_distance(
    distance: f64,
    base_scale: f64,
    max_normal_distance: f64,
    min_scale: f64,
) -> f64 {
    if distance <= max_normal_distance {
        return base_scale;
    }
    (base_scale * max_normal_distance / distance).max(min_scale)
}

/// Caller-owned visibility and falloff thresholds.
///
/// Bundles the three plain configuration values so hosts pass one struct
/// instead of repeating loose floats at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityPolicy {
    /// Objects farther than this are hidden (meters)
    pub max_distance_m: f64,
    /// Objects nearer than this keep their base scale (meters)
    pub max_normal_distance_m: f64,
    /// Floor for the falloff scale
    pub min_scale: f64,
}

impl VisibilityPolicy {
    pub fn new(max_distance_m: f64, max_normal_distance_m: f64, min_scale: f64) -> GeoResult<Self> {
        let policy = Self {
            max_distance_m,
            max_normal_distance_m,
            min_scale,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> GeoResult<()> {
        if !self.max_distance_m.is_finite() || self.max_distance_m <= 0.0 {
            return Err(GeoError::ConfigError {
                parameter: "max_distance_m".to_string(),
                value: self.max_distance_m.to_string(),
                reason: "must be finite and positive".to_string(),
            });
        }
        if !self.max_normal_distance_m.is_finite() || self.max_normal_distance_m <= 0.0 {
            return Err(GeoError::ConfigError {
                parameter: "max_normal_distance_m".to_string(),
                value: self.max_normal_distance_m.to_string(),
                reason: "must be finite and positive".to_string(),
            });
        }
        if !self.min_scale.is_finite() || self.min_scale < 0.0 {
            return Err(GeoError::ConfigError {
                parameter: "min_scale".to_string(),
                value: self.min_scale.to_string(),
                reason: "must be finite and non-negative".to_string(),
            });
        }
        Ok(())
    }

    pub fn is_visible(&self, distance: f64) -> bool {
        is_visible(distance, self.max_distance_m)
    }

    pub fn scale_for_distance(&self, distance: f64, base_scale: f64) -> f64 {
        scale_for_distance(
            distance,
            base_scale,
            self.max_normal_distance_m,
            self.min_scale,
        )
    }
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self {
            max_distance_m: 1000.0,
            max_normal_distance_m: 100.0,
            min_scale: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_boundary() {
        assert!(is_visible(0.0, 100.0));
        assert!(is_visible(99.9, 100.0));
        assert!(is_visible(100.0, 100.0));
        assert!(!is_visible(100.001, 100.0));
        assert!(!is_visible(5000.0, 100.0));
    }

    #[test]
    fn test_base_scale_within_normal_distance() {
        assert_eq!(scale_for_distance(0.0, 5.0, 100.0, 0.5), 5.0);
        assert_eq!(scale_for_distance(42.0, 5.0, 100.0, 0.5), 5.0);
        assert_eq!(scale_for_distance(100.0, 5.0, 100.0, 0.5), 5.0);
    }

    #[test]
    fn test_scale_is_non_increasing() {
        let mut previous = f64::INFINITY;
        for step in 0..200 {
            let distance = step as f64 * 10.0;
            let scale = scale_for_distance(distance, 5.0, 100.0, 0.5);
            assert!(scale <= previous);
            previous = scale;
        }
    }

    #[test]
    fn test_scale_floor() {
        // 5.0 * 100 / 10000 = 0.05, below the 0.5 floor
        assert_eq!(scale_for_distance(10_000.0, 5.0, 100.0, 0.5), 0.5);
        assert_eq!(scale_for_distance(1e9, 5.0, 100.0, 0.5), 0.5);
    }

    #[test]
    fn test_scale_continuous_at_knee() {
        let at_knee = scale_for_distance(100.0, 5.0, 100.0, 0.1);
        let just_past = scale_for_distance(100.0001, 5.0, 100.0, 0.1);
        assert_eq!(at_knee, 5.0);
        assert!((just_past - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_policy_validation() {
        assert!(VisibilityPolicy::new(1000.0, 100.0, 0.1).is_ok());
        assert!(VisibilityPolicy::new(0.0, 100.0, 0.1).is_err());
        assert!(VisibilityPolicy::new(1000.0, -1.0, 0.1).is_err());
        assert!(VisibilityPolicy::new(1000.0, 100.0, f64::NAN).is_err());
    }

    #[test]
    fn test_policy_delegates() {
        let policy = VisibilityPolicy::new(500.0, 50.0, 0.25).unwrap();
        assert!(policy.is_visible(500.0));
        assert!(!policy.is_visible(500.1));
        assert_eq!(policy.scale_for_distance(25.0, 2.0), 2.0);
        assert_eq!(policy.scale_for_distance(100.0, 2.0), 1.0);
    }
}
