//! Types exchanged with the rendering collaborator

use serde::{Deserialize, Serialize};

use crate::core::types::{LocalOffset, ObjectKind};

/// One placement decision for one tracked object.
///
/// This is the complete set of geometric facts the rendering layer needs to
/// position, scale and show/hide its scene node for the object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectPlacement {
    /// Id of the tracked object this placement belongs to
    pub object_id: String,
    /// Kind of node the host renders for it
    pub kind: ObjectKind,
    /// Position relative to the user, in the scene frame
    pub offset: LocalOffset,
    /// Great-circle distance from the user (meters)
    pub distance_m: f64,
    /// Compass bearing from the user, [0, 360) degrees
    pub bearing_deg: f64,
    /// Effective scale after distance falloff
    pub scale: f64,
    /// Whether the object should be rendered at all
    pub visible: bool,
}

/// Rendering-side consumer of placement decisions.
///
/// The core addresses every rendering backend through this one interface;
/// it never learns what kind of scene graph sits behind it.
pub trait PlacementSink {
    /// Apply one placement to the scene node registered under the object id
    fn apply_placement(&mut self, placement: &ObjectPlacement);
}

/// Sink that records placements, for hosts that batch-apply and for tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub placements: Vec<ObjectPlacement>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlacementSink for RecordingSink {
    fn apply_placement(&mut self, placement: &ObjectPlacement) {
        self.placements.push(placement.clone());
    }
}
