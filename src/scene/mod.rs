//! Visibility policy and tracked-object orchestration

pub mod tracker;
pub mod visibility;

pub use tracker::ObjectTracker;
pub use visibility::{is_visible, scale_for_distance, VisibilityPolicy};
