//! Shared fixtures for the layer tests.

use planar_engine::coords::{Rect, Vec2, Viewport};
use planar_engine::paint::{BlendMode, Color};

use super::{InvalidationMode, Layer, SyncMode};
use crate::context::SceneServices;
use crate::floor::{Floor, FloorPlan};
use crate::relay::{RelayEvent, RelayReceiver};
use crate::shape::{Shape, ShapeId};
use crate::surface::Surface;

pub(super) const USER: &str = "alice";
pub(super) const FLOOR: &str = "ground";
pub(super) const LAYER: &str = "tokens";

/// "cellar" and "ground", each with `map / tokens / fow`; "tokens" active
/// on the ground floor, which is the viewed one.
pub(super) fn floor_plan() -> FloorPlan {
    let mut plan = FloorPlan::new()
        .with_floor(Floor::new("cellar", ["map", "tokens", "fow"]))
        .with_floor(Floor::new(FLOOR, ["map", LAYER, "fow"]));
    plan.select_floor(1);
    plan.select_layer(FLOOR, LAYER);
    plan
}

pub(super) struct Fixture {
    pub services: SceneServices,
    pub rx: RelayReceiver,
    pub layer: Layer,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_layer(Layer::new(LAYER, FLOOR))
    }

    pub fn with_layer(layer: Layer) -> Self {
        let (services, rx) = SceneServices::new(USER, floor_plan());
        Self { services, rx, layer }
    }

    /// Local, snappable, normally invalidating add.
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        self.layer.add_shape(&mut self.services.ctx(), shape, SyncMode::NoSync, InvalidationMode::Normal, true)
    }

    pub fn ids(&self) -> Vec<ShapeId> {
        self.layer.shapes().iter().map(Shape::id).collect()
    }

    pub fn events(&mut self) -> Vec<RelayEvent> {
        self.rx.drain()
    }

    /// Draws into `surface`, reporting whether any work was done.
    pub fn draw(&mut self, surface: &mut Recorder) -> bool {
        let ctx = self.services.ctx();
        self.layer.draw(surface, &ctx, true)
    }

    /// Draws once so the layer starts out valid, then forgets the queued requests.
    pub fn settle(&mut self) {
        self.draw(&mut Recorder::new());
        self.services.visibility.take_requests();
    }
}

/// One call made on a [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Op {
    Clear,
    Blend(BlendMode),
    Rect(Rect, Color),
    Circle(Vec2, f32, Color),
    Fill(Vec<Vec2>, Color),
    Stroke(Vec<Vec2>, Color),
}

/// [`Surface`] that only records what it was asked to do.
#[derive(Debug)]
pub(super) struct Recorder {
    pub ops: Vec<Op>,
    pub viewport: Viewport,
    blend: BlendMode,
}

impl Recorder {
    pub fn new() -> Self {
        Self { ops: Vec::new(), viewport: Viewport::new(100.0, 100.0), blend: BlendMode::SourceOver }
    }

    /// Paint calls only: no clears, no blend switches.
    pub fn paints(&self) -> Vec<&Op> {
        self.ops.iter().filter(|op| !matches!(op, Op::Clear | Op::Blend(_))).collect()
    }

    pub fn circles(&self) -> Vec<(Vec2, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Circle(c, r, _) => Some((*c, *r)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
        self.ops.push(Op::Blend(mode));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(Op::Rect(rect, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ops.push(Op::Circle(center, radius, color));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.ops.push(Op::Fill(points.to_vec(), color));
    }

    fn stroke_polygon(&mut self, points: &[Vec2], _closed: bool, _width: f32, color: Color) {
        self.ops.push(Op::Stroke(points.to_vec(), color));
    }
}
