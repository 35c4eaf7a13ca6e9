//! Bookkeeping the triangulation engine consumes.
//!
//! The engine itself (line-of-sight polygons, movement meshes) lives outside
//! this crate. Layers only keep its per-floor inputs current and ask for a
//! recomputation when an input changed in a way that matters.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::shape::{AuraId, ShapeId};

/// Which triangulation a blocker participates in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriangulationTarget {
    Vision,
    Movement,
}

/// An aura that emits vision, keyed by its owning shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct VisionSource {
    pub shape: ShapeId,
    pub aura: AuraId,
}

/// Per-floor inputs of the visibility engine plus its recomputation triggers.
pub trait Visibility {
    fn vision_sources(&self, floor: &str) -> &[VisionSource];
    fn blockers(&self, target: TriangulationTarget, floor: &str) -> &[ShapeId];

    fn add_vision_source(&mut self, source: VisionSource, floor: &str);
    fn add_blocker(&mut self, target: TriangulationTarget, shape: ShapeId, floor: &str);

    /// Removes the vision source at `index`. Out-of-range indices are ignored.
    fn slice_vision_sources(&mut self, index: usize, floor: &str);
    /// Removes the blocker at `index`. Out-of-range indices are ignored.
    fn slice_blockers(&mut self, target: TriangulationTarget, index: usize, floor: &str);

    fn recalculate_vision(&mut self, floor: &str);
    fn recalculate_movement(&mut self, floor: &str);
    /// Lighting (fog of war) of `floor` must be recomposed on the next frame.
    fn invalidate_light(&mut self, floor: &str);

    fn recalculate(&mut self, target: TriangulationTarget, floor: &str) {
        match target {
            TriangulationTarget::Vision => self.recalculate_vision(floor),
            TriangulationTarget::Movement => self.recalculate_movement(floor),
        }
    }
}

/// A recomputation request recorded by [`VisibilityStore`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Recalculation {
    Vision(String),
    Movement(String),
    Light(String),
}

#[derive(Debug, Default)]
struct FloorInputs {
    vision_sources: Vec<VisionSource>,
    vision_blockers: Vec<ShapeId>,
    movement_blockers: Vec<ShapeId>,
}

impl FloorInputs {
    fn blockers_mut(&mut self, target: TriangulationTarget) -> &mut Vec<ShapeId> {
        match target {
            TriangulationTarget::Vision => &mut self.vision_blockers,
            TriangulationTarget::Movement => &mut self.movement_blockers,
        }
    }
}

/// In-process [`Visibility`] implementation.
///
/// Holds the per-floor lists and queues recomputation requests; the
/// triangulation engine drains them with [`take_requests`](Self::take_requests)
/// once per frame.
#[derive(Debug, Default)]
pub struct VisibilityStore {
    floors: HashMap<String, FloorInputs>,
    requests: Vec<Recalculation>,
}

impl VisibilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests queued since the last [`take_requests`](Self::take_requests), oldest first.
    pub fn requests(&self) -> &[Recalculation] {
        &self.requests
    }

    pub fn take_requests(&mut self) -> Vec<Recalculation> {
        std::mem::take(&mut self.requests)
    }

    /// Number of queued requests equal to `request`.
    pub fn count(&self, request: &Recalculation) -> usize {
        self.requests.iter().filter(|r| *r == request).count()
    }

    fn floor_mut(&mut self, floor: &str) -> &mut FloorInputs {
        self.floors.entry(floor.to_owned()).or_default()
    }
}

impl Visibility for VisibilityStore {
    fn vision_sources(&self, floor: &str) -> &[VisionSource] {
        match self.floors.get(floor) {
            Some(f) => f.vision_sources.as_slice(),
            None => &[],
        }
    }

    fn blockers(&self, target: TriangulationTarget, floor: &str) -> &[ShapeId] {
        match (self.floors.get(floor), target) {
            (None, _) => &[],
            (Some(f), TriangulationTarget::Vision) => f.vision_blockers.as_slice(),
            (Some(f), TriangulationTarget::Movement) => f.movement_blockers.as_slice(),
        }
    }

    fn add_vision_source(&mut self, source: VisionSource, floor: &str) {
        self.floor_mut(floor).vision_sources.push(source);
    }

    fn add_blocker(&mut self, target: TriangulationTarget, shape: ShapeId, floor: &str) {
        self.floor_mut(floor).blockers_mut(target).push(shape);
    }

    fn slice_vision_sources(&mut self, index: usize, floor: &str) {
        if let Some(f) = self.floors.get_mut(floor) {
            if index < f.vision_sources.len() {
                f.vision_sources.remove(index);
            }
        }
    }

    fn slice_blockers(&mut self, target: TriangulationTarget, index: usize, floor: &str) {
        if let Some(f) = self.floors.get_mut(floor) {
            let list = f.blockers_mut(target);
            if index < list.len() {
                list.remove(index);
            }
        }
    }

    fn recalculate_vision(&mut self, floor: &str) {
        log::trace!("vision recalculation requested for floor {floor}");
        self.requests.push(Recalculation::Vision(floor.to_owned()));
    }

    fn recalculate_movement(&mut self, floor: &str) {
        log::trace!("movement recalculation requested for floor {floor}");
        self.requests.push(Recalculation::Movement(floor.to_owned()));
    }

    fn invalidate_light(&mut self, floor: &str) {
        self.requests.push(Recalculation::Light(floor.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── lists ─────────────────────────────────────────────────────────────

    #[test]
    fn unknown_floor_is_empty() {
        let store = VisibilityStore::new();
        assert!(store.vision_sources("attic").is_empty());
        assert!(store.blockers(TriangulationTarget::Movement, "attic").is_empty());
    }

    #[test]
    fn blockers_are_per_target_and_floor() {
        let mut store = VisibilityStore::new();
        let a = ShapeId::new();
        let b = ShapeId::new();
        store.add_blocker(TriangulationTarget::Vision, a, "ground");
        store.add_blocker(TriangulationTarget::Movement, b, "ground");
        store.add_blocker(TriangulationTarget::Vision, b, "cellar");

        assert_eq!(store.blockers(TriangulationTarget::Vision, "ground"), &[a]);
        assert_eq!(store.blockers(TriangulationTarget::Movement, "ground"), &[b]);
        assert_eq!(store.blockers(TriangulationTarget::Vision, "cellar"), &[b]);
    }

    #[test]
    fn slice_out_of_range_is_ignored() {
        let mut store = VisibilityStore::new();
        let a = ShapeId::new();
        store.add_blocker(TriangulationTarget::Vision, a, "ground");
        store.slice_blockers(TriangulationTarget::Vision, 3, "ground");
        store.slice_vision_sources(0, "ground");
        assert_eq!(store.blockers(TriangulationTarget::Vision, "ground"), &[a]);

        store.slice_blockers(TriangulationTarget::Vision, 0, "ground");
        assert!(store.blockers(TriangulationTarget::Vision, "ground").is_empty());
    }

    // ── requests ──────────────────────────────────────────────────────────

    #[test]
    fn requests_queue_until_taken() {
        let mut store = VisibilityStore::new();
        store.recalculate(TriangulationTarget::Vision, "ground");
        store.recalculate(TriangulationTarget::Movement, "ground");
        store.invalidate_light("ground");

        assert_eq!(store.count(&Recalculation::Vision("ground".into())), 1);
        assert_eq!(store.take_requests().len(), 3);
        assert!(store.requests().is_empty());
    }
}
