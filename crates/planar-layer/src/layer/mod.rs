//! The layer: z-ordered shapes of one floor plus their derived state.
//!
//! - `membership`: add / remove / reorder / bulk load, keeping every index in step
//! - `render`: invalidation, the two-pass draw and `wait_valid`

mod membership;
mod render;

#[cfg(test)]
mod testing;

use futures::channel::oneshot;
use planar_engine::coords::Vec2;

use crate::config::LayerConfig;
use crate::context::SceneCtx;
use crate::point_index::PointIndex;
use crate::shape::{Shape, ShapeId};

pub use render::WaitValid;

/// Whether, and how, a mutation is mirrored to other participants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum SyncMode {
    /// Local only (already-confirmed state, remote echoes).
    #[default]
    NoSync,
    /// Mirrored but provisional, e.g. while a drag is in progress.
    TempSync,
    FullSync,
}

impl SyncMode {
    #[inline]
    pub fn is_synced(self) -> bool {
        self != SyncMode::NoSync
    }

    #[inline]
    pub fn is_temporary(self) -> bool {
        self == SyncMode::TempSync
    }
}

/// How much redraw work an addition schedules.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum InvalidationMode {
    /// Nothing; the caller batches and invalidates once.
    No,
    /// Redraw this layer.
    #[default]
    Normal,
    /// Redraw and recompose the floor's lighting.
    WithLight,
}

impl InvalidationMode {
    #[inline]
    pub fn invalidates(self) -> bool {
        self != InvalidationMode::No
    }
}

/// One floor-scoped, z-ordered collection of shapes.
///
/// Draw order is `shapes()` order, back to front. Shapes are owned by the
/// layer while they are members; [`remove_shape`](Self::remove_shape) hands
/// them back.
#[derive(Debug)]
pub struct Layer {
    name: String,
    floor: String,

    pub selectable: bool,
    pub player_editable: bool,
    pub is_vision_layer: bool,

    visible: bool,
    /// `false` = the next `draw` does real work.
    valid: bool,

    shapes: Vec<Shape>,
    selection: Vec<ShapeId>,
    points: PointIndex,
    config: LayerConfig,

    waiters: Vec<oneshot::Sender<()>>,
}

impl Layer {
    pub fn new(name: impl Into<String>, floor: impl Into<String>) -> Self {
        Self::with_config(name, floor, LayerConfig::default())
    }

    pub fn with_config(name: impl Into<String>, floor: impl Into<String>, config: LayerConfig) -> Self {
        Self {
            name: name.into(),
            floor: floor.into(),
            selectable: false,
            player_editable: false,
            is_vision_layer: false,
            visible: true,
            valid: false,
            shapes: Vec::new(),
            selection: Vec::new(),
            points: PointIndex::new(),
            config,
            waiters: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn floor(&self) -> &str {
        &self.floor
    }

    #[inline]
    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hidden layers keep their state; drawing settles them without painting.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Marks the layer dirty so the next draw paints what hiding skipped.
    pub fn show(&mut self) {
        if !self.visible {
            self.visible = true;
            self.valid = false;
        }
    }

    // ── shapes ────────────────────────────────────────────────────────────

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// In-place access for moves and property edits.
    ///
    /// The layer is not told what changed: follow geometry edits with
    /// [`update_shape_points`](Self::update_shape_points) and invalidate.
    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    // ── snap points ───────────────────────────────────────────────────────

    #[inline]
    pub fn points(&self) -> &PointIndex {
        &self.points
    }

    /// Closest vertex of another shape within `radius` of `point`.
    pub fn snap_point(&self, point: Vec2, radius: f32, dragging: Option<ShapeId>) -> Option<Vec2> {
        self.points.nearest(point, radius, dragging)
    }

    // ── selection ─────────────────────────────────────────────────────────

    #[inline]
    pub fn selection(&self) -> &[ShapeId] {
        &self.selection
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selection.contains(&id)
    }

    /// Adds a member to the selection. Non-members and duplicates are ignored.
    pub fn push_selection(&mut self, id: ShapeId) -> bool {
        if !self.contains(id) || self.is_selected(id) {
            return false;
        }
        self.selection.push(id);
        self.valid = false;
        true
    }

    /// Replaces the selection, keeping only members.
    pub fn set_selection(&mut self, ids: impl IntoIterator<Item = ShapeId>) {
        self.selection.clear();
        for id in ids {
            self.push_selection(id);
        }
        self.valid = false;
    }

    /// Empties the selection and tells subscribers nothing is selected.
    pub fn clear_selection(&mut self, ctx: &mut SceneCtx<'_>) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.valid = false;
        }
        ctx.selection_signal.publish(None);
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Fixture;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn new_layer_starts_invalid_and_visible() {
        let layer = Layer::new("tokens", "ground");
        assert!(!layer.is_valid());
        assert!(layer.is_visible());
        assert!(layer.is_empty());
    }

    #[test]
    fn selection_only_holds_members() {
        let mut fx = Fixture::new();
        let a = fx.add(Shape::circle(Vec2::zero(), 1.0));

        assert!(fx.layer.push_selection(a));
        assert!(!fx.layer.push_selection(a));
        assert!(!fx.layer.push_selection(ShapeId::new()));

        fx.layer.set_selection([ShapeId::new(), a]);
        assert_eq!(fx.layer.selection(), &[a]);
    }

    #[test]
    fn clear_selection_publishes_none() {
        let mut fx = Fixture::new();
        let a = fx.add(Shape::circle(Vec2::zero(), 1.0));
        fx.layer.push_selection(a);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        fx.services.selection_signal.subscribe(move |s| sink.borrow_mut().push(s));

        fx.layer.clear_selection(&mut fx.services.ctx());
        assert!(fx.layer.selection().is_empty());
        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[test]
    fn snap_point_skips_dragged_shape() {
        let mut fx = Fixture::new();
        let a = fx.add(Shape::rect(Vec2::zero(), 2.0, 2.0));
        let b = fx.add(Shape::circle(Vec2::new(3.0, 0.0), 1.0));

        assert_eq!(fx.layer.snap_point(Vec2::new(2.2, 0.0), 1.0, None), Some(Vec2::new(2.0, 0.0)));
        assert_eq!(fx.layer.snap_point(Vec2::new(2.2, 0.0), 1.0, Some(a)), Some(Vec2::new(3.0, 0.0)));
        assert_eq!(fx.layer.snap_point(Vec2::new(2.2, 0.0), 1.0, Some(b)), Some(Vec2::new(2.0, 0.0)));
    }
}
