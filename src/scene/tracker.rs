//! Tracked-object set and per-update placement computation.
//!
//! The tracker owns the only state in the system: the current reference
//! frame and the registered objects. Every geometric result is recomputed
//! from scratch on each reference update, so there is nothing to lock and
//! nothing to drift.

use crate::api::types::{ObjectPlacement, PlacementSink};
use crate::core::types::{GeoCoordinate, ReferenceFrame, TrackedObject};
use crate::geometry::metrics::{bearing, haversine_distance};
use crate::geometry::projection::GeoProjector;
use crate::scene::visibility::VisibilityPolicy;
use crate::validation::error::{GeoError, GeoResult};

/// Computes placements for a set of world-anchored objects relative to the
/// moving user position.
#[derive(Debug, Clone)]
pub struct ObjectTracker {
    reference: ReferenceFrame,
    objects: Vec<TrackedObject>,
    policy: VisibilityPolicy,
    projector: GeoProjector,
}

impl ObjectTracker {
    /// Create a tracker centered on the user's starting coordinate
    pub fn new(origin: GeoCoordinate, policy: VisibilityPolicy) -> GeoResult<Self> {
        policy.validate()?;
        Ok(Self {
            reference: ReferenceFrame::new(origin)?,
            objects: Vec::new(),
            policy,
            projector: GeoProjector::new(),
        })
    }

    /// Register an object. Ids must be unique; the coordinate is fixed for
    /// the session.
    pub fn add_object(&mut self, object: TrackedObject) -> GeoResult<()> {
        if self.objects.iter().any(|o| o.id == object.id) {
            return Err(GeoError::DuplicateObjectId { id: object.id });
        }
        self.objects.push(object);
        Ok(())
    }

    /// Remove an object by id, returning it to the caller
    pub fn remove_object(&mut self, id: &str) -> GeoResult<TrackedObject> {
        let index = self
            .objects
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| GeoError::UnknownObjectId { id: id.to_string() })?;
        Ok(self.objects.remove(index))
    }

    pub fn objects(&self) -> &[TrackedObject] {
        &self.objects
    }

    pub fn reference(&self) -> &ReferenceFrame {
        &self.reference
    }

    /// Move the projection origin to a new fix or manual override.
    ///
    /// All previously computed offsets become stale; callers re-run
    /// `placements` (or `apply_to`) after every update.
    pub fn update_reference(&mut self, origin: GeoCoordinate) -> GeoResult<()> {
        self.reference.update(origin)
    }

    /// Compute the placement of a single object against the current
    /// reference
    pub fn placement_for(&self, object: &TrackedObject) -> ObjectPlacement {
        let origin = &self.reference.origin;
        let offset = self.projector.to_local(origin, &object.coordinate);
        let distance_m = haversine_distance(origin, &object.coordinate);
        let bearing_deg = bearing(origin, &object.coordinate);

        ObjectPlacement {
            object_id: object.id.clone(),
            kind: object.kind,
            offset,
            distance_m,
            bearing_deg,
            scale: self.policy.scale_for_distance(distance_m, object.base_scale),
            visible: self.policy.is_visible(distance_m),
        }
    }

    /// Compute placements for every registered object, in registration
    /// order
    pub fn placements(&self) -> Vec<ObjectPlacement> {
        self.objects.iter().map(|o| self.placement_for(o)).collect()
    }

    /// Compute placements and push each one into the rendering collaborator
    pub fn apply_to(&self, sink: &mut dyn PlacementSink) {
        for object in &self.objects {
            sink.apply_placement(&self.placement_for(object));
        }
    }

    /// The registered object closest to the current reference, if any
    pub fn nearest_object(&self) -> Option<(&TrackedObject, f64)> {
        self.objects
            .iter()
            .map(|o| (o, haversine_distance(&self.reference.origin, &o.coordinate)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Objects within `max_distance_m` of the current reference
    pub fn objects_within(&self, max_distance_m: f64) -> Vec<&TrackedObject> {
        self.objects
            .iter()
            .filter(|o| {
                haversine_distance(&self.reference.origin, &o.coordinate) <= max_distance_m
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::RecordingSink;
    use crate::core::types::ObjectKind;

    fn santos() -> GeoCoordinate {
        GeoCoordinate::new(-23.978699, -46.316639).unwrap()
    }

    fn tracker_with_two_objects() -> ObjectTracker {
        let origin = santos();
        let policy = VisibilityPolicy::new(1000.0, 100.0, 0.1).unwrap();
        let mut tracker = ObjectTracker::new(origin, policy).unwrap();

        // ~55 m north
        let near = GeoCoordinate::new(origin.latitude + 0.0005, origin.longitude).unwrap();
        tracker
            .add_object(TrackedObject::new("near", near, 5.0, ObjectKind::Model).unwrap())
            .unwrap();

        // ~5 km east, beyond the 1 km cutoff
        let far = GeoCoordinate::new(origin.latitude, origin.longitude + 0.05).unwrap();
        tracker
            .add_object(TrackedObject::new("far", far, 2.0, ObjectKind::Marker).unwrap())
            .unwrap();

        tracker
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut tracker = tracker_with_two_objects();
        let coord = santos();
        let duplicate = TrackedObject::new("near", coord, 1.0, ObjectKind::Label).unwrap();
        assert!(matches!(
            tracker.add_object(duplicate),
            Err(GeoError::DuplicateObjectId { .. })
        ));
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut tracker = tracker_with_two_objects();
        assert!(tracker.remove_object("near").is_ok());
        assert!(matches!(
            tracker.remove_object("near"),
            Err(GeoError::UnknownObjectId { .. })
        ));
    }

    #[test]
    fn test_placements_reflect_distance_policy() {
        let tracker = tracker_with_two_objects();
        let placements = tracker.placements();
        assert_eq!(placements.len(), 2);

        let near = &placements[0];
        assert_eq!(near.object_id, "near");
        assert!(near.visible);
        assert_eq!(near.scale, 5.0);
        assert!((near.distance_m - 55.5).abs() < 0.5);
        assert!(near.bearing_deg.abs() < 0.01);
        assert!(near.offset.z < 0.0);

        let far = &placements[1];
        assert!(!far.visible);
        assert!(far.scale < 2.0);
        assert!(far.scale >= 0.1);
        assert!((far.bearing_deg - 90.0).abs() < 0.1);
    }

    #[test]
    fn test_reference_update_moves_offsets() {
        let mut tracker = tracker_with_two_objects();
        let before = tracker.placement_for(&tracker.objects()[0]);

        // Walk ~55 m north, onto the near object
        let origin = tracker.reference().origin;
        let moved = GeoCoordinate::new(origin.latitude + 0.0005, origin.longitude).unwrap();
        tracker.update_reference(moved).unwrap();

        let after = tracker.placement_for(&tracker.objects()[0]);
        assert!(before.distance_m > after.distance_m);
        assert!(after.distance_m < 1.0);
        assert_eq!(tracker.reference().revision, 1);
    }

    #[test]
    fn test_nearest_and_filter() {
        let tracker = tracker_with_two_objects();
        let (nearest, distance) = tracker.nearest_object().unwrap();
        assert_eq!(nearest.id, "near");
        assert!(distance < 100.0);

        let within = tracker.objects_within(1000.0);
        assert_eq!(within.len(), 1);
        assert_eq!(within[0].id, "near");
        assert_eq!(tracker.objects_within(10_000.0).len(), 2);
    }

    #[test]
    fn test_apply_to_sink() {
        let tracker = tracker_with_two_objects();
        let mut sink = RecordingSink::new();
        tracker.apply_to(&mut sink);
        assert_eq!(sink.placements.len(), 2);
        assert_eq!(sink.placements[0].object_id, "near");
    }
}
