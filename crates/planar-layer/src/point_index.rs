//! Snap-point index: which shapes have a vertex at a given point.

use std::collections::{HashMap, HashSet};

use planar_engine::coords::Vec2;

use crate::shape::ShapeId;

/// Value-canonical point key.
///
/// Equal coordinates always collide: `-0.0` folds onto `0.0` and every NaN onto
/// one bit pattern, so the key behaves like the textual form of the point.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PointKey {
    x: u32,
    y: u32,
}

impl PointKey {
    pub fn new(point: Vec2) -> Self {
        Self { x: canonical_bits(point.x), y: canonical_bits(point.y) }
    }

    pub fn point(self) -> Vec2 {
        Vec2::new(f32::from_bits(self.x), f32::from_bits(self.y))
    }
}

impl From<Vec2> for PointKey {
    fn from(point: Vec2) -> Self {
        Self::new(point)
    }
}

fn canonical_bits(v: f32) -> u32 {
    if v == 0.0 {
        0.0_f32.to_bits()
    } else if v.is_nan() {
        f32::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

/// Mapping from snap point to the shapes occupying it.
///
/// Invariant: a key is present iff its set is non-empty.
#[derive(Debug, Default, Clone)]
pub struct PointIndex {
    points: HashMap<PointKey, HashSet<ShapeId>>,
}

impl PointIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` at every point in `points`.
    pub fn register(&mut self, id: ShapeId, points: &[Vec2]) {
        for p in points {
            self.points.entry(PointKey::new(*p)).or_default().insert(id);
        }
    }

    /// Removes `id` from every point in `points`, dropping keys that end up empty.
    pub fn unregister(&mut self, id: ShapeId, points: &[Vec2]) {
        for p in points {
            let key = PointKey::new(*p);
            if let Some(set) = self.points.get_mut(&key) {
                set.remove(&id);
                if set.is_empty() {
                    self.points.remove(&key);
                }
            }
        }
    }

    /// Reconciles the index with the current `points` of a shape whose geometry
    /// changed since it was registered.
    ///
    /// Scans every key, so no snapshot of the previous geometry is needed.
    pub fn update(&mut self, id: ShapeId, points: &[Vec2]) {
        let current: HashSet<PointKey> = points.iter().copied().map(PointKey::new).collect();

        self.points.retain(|key, set| {
            if !current.contains(key) {
                set.remove(&id);
            }
            !set.is_empty()
        });

        for key in current {
            self.points.entry(key).or_default().insert(id);
        }
    }

    /// Shapes with a vertex at `point`.
    pub fn shapes_at(&self, point: Vec2) -> Option<&HashSet<ShapeId>> {
        self.points.get(&PointKey::new(point))
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.points.contains_key(&PointKey::new(point))
    }

    /// Whether `id` occupies any point.
    pub fn references(&self, id: ShapeId) -> bool {
        self.points.values().any(|set| set.contains(&id))
    }

    /// Closest occupied point within `radius` of `point`, if any.
    ///
    /// `exclude` skips points whose only occupant is that shape, so a shape
    /// being dragged does not snap onto its own vertices.
    pub fn nearest(&self, point: Vec2, radius: f32, exclude: Option<ShapeId>) -> Option<Vec2> {
        self.points
            .iter()
            .filter(|(_, set)| match exclude {
                Some(id) => set.iter().any(|s| *s != id),
                None => true,
            })
            .map(|(key, _)| {
                let p = key.point();
                (p, p.distance(point))
            })
            .filter(|(_, d)| *d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(p, _)| p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
