//! Scene shapes.
//!
//! The shape universe is closed: [`ShapeKind`] enumerates every geometry the
//! scene knows, and [`Shape`] carries the metadata every kind shares (owners,
//! obstruction flags, auras, labels, options). Wire snapshots use
//! [`ServerShape`], whose raw `type_` tag is only resolved in
//! [`Shape::from_dict`].

use std::collections::BTreeMap;
use std::fmt;

use planar_engine::coords::{Rect, Vec2};
use planar_engine::paint::{BlendMode, Color};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::ShapeError;
use crate::surface::{SelectionStyle, Surface};
use crate::visibility::{TriangulationTarget, Visibility, VisionSource};

/// Option-bag key that hides a shape from both draw passes.
pub const SKIP_DRAW: &str = "skipDraw";

const DEFAULT_FILL: &str = "#000000";
const DEFAULT_STROKE: &str = "#ffffff";

// ── identities ────────────────────────────────────────────────────────────

/// Stable identity of a shape across layers, floors and participants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

pub type AuraId = Uuid;
pub type LabelId = Uuid;

// ── attachments ───────────────────────────────────────────────────────────

/// Light/vision circle around a shape's center.
///
/// `radius` is the bright part, `dim` extends beyond it at half strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aura {
    pub id: AuraId,
    pub radius: f32,
    #[serde(default)]
    pub dim: f32,
    #[serde(with = "crate::colour")]
    pub colour: Color,
    #[serde(default)]
    pub vision_source: bool,
}

impl Aura {
    pub fn new(radius: f32, colour: Color) -> Self {
        Self { id: Uuid::new_v4(), radius, dim: 0.0, colour, vision_source: false }
    }

    pub fn with_dim(mut self, dim: f32) -> Self {
        self.dim = dim;
        self
    }

    pub fn emitting_vision(mut self) -> Self {
        self.vision_source = true;
        self
    }

    #[inline]
    pub fn reach(&self) -> f32 {
        self.radius.max(0.0) + self.dim.max(0.0)
    }
}

/// User-defined tag used by per-participant label filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    #[serde(default)]
    pub category: String,
    pub name: String,
}

impl Label {
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), category: category.into(), name: name.into() }
    }
}

// ── geometry ──────────────────────────────────────────────────────────────

/// Geometry of a shape. Serialized internally tagged by `type_`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type_", rename_all = "lowercase")]
pub enum ShapeKind {
    Rect { ref_point: Vec2, width: f32, height: f32 },
    Circle { center: Vec2, radius: f32 },
    Polygon {
        vertices: Vec<Vec2>,
        #[serde(default)]
        open: bool,
    },
    Line {
        from: Vec2,
        to: Vec2,
        #[serde(default = "default_line_width")]
        line_width: f32,
    },
}

fn default_line_width() -> f32 {
    1.0
}

impl ShapeKind {
    /// Every tag [`Shape::from_dict`] accepts.
    pub const TYPE_TAGS: [&'static str; 4] = ["rect", "circle", "polygon", "line"];

    pub fn type_tag(&self) -> &'static str {
        match self {
            ShapeKind::Rect { .. } => "rect",
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Polygon { .. } => "polygon",
            ShapeKind::Line { .. } => "line",
        }
    }

    /// Representative points: the snap targets of this geometry.
    pub fn points(&self) -> Vec<Vec2> {
        match self {
            ShapeKind::Rect { ref_point, width, height } => {
                Rect::from_origin_size(*ref_point, Vec2::new(*width, *height)).corners().to_vec()
            }
            ShapeKind::Circle { center, .. } => vec![*center],
            ShapeKind::Polygon { vertices, .. } => vertices.clone(),
            ShapeKind::Line { from, to, .. } => vec![*from, *to],
        }
    }

    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            ShapeKind::Circle { center, radius } => {
                Some(Rect::from_origin_size(*center, Vec2::zero()).inflate(*radius))
            }
            ShapeKind::Line { from, to, line_width } => {
                Rect::from_points([*from, *to]).map(|r| r.inflate(line_width / 2.0))
            }
            other => Rect::from_points(other.points()),
        }
    }

    pub fn center(&self) -> Option<Vec2> {
        match self {
            ShapeKind::Circle { center, .. } => Some(*center),
            other => other.bounding_box().map(Rect::center),
        }
    }
}

// ── shape ─────────────────────────────────────────────────────────────────

/// A drawable scene object.
///
/// `layer` and `floor` are stamped by [`crate::Layer::add_shape`]; a shape not
/// yet added carries whatever the snapshot said (or empty strings).
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    pub kind: ShapeKind,
    pub(crate) layer: String,
    pub(crate) floor: String,
    pub owners: Vec<String>,
    pub is_token: bool,
    pub movement_obstruction: bool,
    pub vision_obstruction: bool,
    pub annotation: String,
    pub labels: Vec<Label>,
    pub options: BTreeMap<String, Value>,
    pub fill_colour: Color,
    pub stroke_colour: Color,
    pub stroke_width: f32,
    pub blend: BlendMode,
    pub auras: Vec<Aura>,
}

impl Shape {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            id: ShapeId::new(),
            kind,
            layer: String::new(),
            floor: String::new(),
            owners: Vec::new(),
            is_token: false,
            movement_obstruction: false,
            vision_obstruction: false,
            annotation: String::new(),
            labels: Vec::new(),
            options: BTreeMap::new(),
            fill_colour: Color::black(),
            stroke_colour: Color::from_srgb_u8(255, 255, 255, 255),
            stroke_width: 0.0,
            blend: BlendMode::SourceOver,
            auras: Vec::new(),
        }
    }

    pub fn rect(ref_point: Vec2, width: f32, height: f32) -> Self {
        Self::new(ShapeKind::Rect { ref_point, width, height })
    }

    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self::new(ShapeKind::Circle { center, radius })
    }

    pub fn polygon(vertices: Vec<Vec2>) -> Self {
        Self::new(ShapeKind::Polygon { vertices, open: false })
    }

    pub fn line(from: Vec2, to: Vec2, line_width: f32) -> Self {
        Self::new(ShapeKind::Line { from, to, line_width })
    }

    // ── builders ──────────────────────────────────────────────────────────

    pub fn with_id(mut self, id: ShapeId) -> Self {
        self.id = id;
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owners.push(owner.into());
        self
    }

    pub fn as_token(mut self) -> Self {
        self.is_token = true;
        self
    }

    pub fn blocking_vision(mut self) -> Self {
        self.vision_obstruction = true;
        self
    }

    pub fn blocking_movement(mut self) -> Self {
        self.movement_obstruction = true;
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = annotation.into();
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_aura(mut self, aura: Aura) -> Self {
        self.auras.push(aura);
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_fill(mut self, colour: Color) -> Self {
        self.fill_colour = colour;
        self
    }

    pub fn with_stroke(mut self, colour: Color, width: f32) -> Self {
        self.stroke_colour = colour;
        self.stroke_width = width;
        self
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    #[inline]
    pub fn layer(&self) -> &str {
        &self.layer
    }

    #[inline]
    pub fn floor(&self) -> &str {
        &self.floor
    }

    #[inline]
    pub fn points(&self) -> Vec<Vec2> {
        self.kind.points()
    }

    #[inline]
    pub fn bounding_box(&self) -> Option<Rect> {
        self.kind.bounding_box()
    }

    pub fn owned_by(&self, principal: &str) -> bool {
        self.owners.iter().any(|o| o == principal)
    }

    pub fn has_annotation(&self) -> bool {
        !self.annotation.is_empty()
    }

    pub fn skip_draw(&self) -> bool {
        self.options.get(SKIP_DRAW).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Whether any part of the shape, auras included, falls inside `world`.
    pub fn visible_in_canvas(&self, world: Rect) -> bool {
        let Some(bbox) = self.bounding_box() else {
            return false;
        };
        let reach = self.auras.iter().map(Aura::reach).fold(0.0_f32, f32::max);
        let reach_box = match self.kind.center() {
            Some(c) if reach > 0.0 => Rect::from_origin_size(c, Vec2::zero()).inflate(reach),
            _ => bbox,
        };
        bbox.overlaps(world) || reach_box.overlaps(world)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn draw_auras(&self, surface: &mut dyn Surface) {
        let Some(center) = self.kind.center() else {
            return;
        };
        for aura in self.auras.iter().filter(|a| a.reach() > 0.0) {
            if aura.dim > 0.0 {
                let (.., a) = aura.colour.to_straight();
                surface.fill_circle(center, aura.reach(), aura.colour.with_alpha(a * 0.5));
            }
            if aura.radius > 0.0 {
                surface.fill_circle(center, aura.radius, aura.colour);
            }
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.set_blend_mode(self.blend);
        match &self.kind {
            ShapeKind::Rect { ref_point, width, height } => {
                let rect = Rect::from_origin_size(*ref_point, Vec2::new(*width, *height));
                surface.fill_rect(rect, self.fill_colour);
                if self.stroke_width > 0.0 {
                    surface.stroke_polygon(&rect.corners(), true, self.stroke_width, self.stroke_colour);
                }
            }
            ShapeKind::Circle { center, radius } => {
                surface.fill_circle(*center, *radius, self.fill_colour);
            }
            ShapeKind::Polygon { vertices, open } => {
                if !*open {
                    surface.fill_polygon(vertices, self.fill_colour);
                }
                if *open || self.stroke_width > 0.0 {
                    let width = if self.stroke_width > 0.0 { self.stroke_width } else { 1.0 };
                    surface.stroke_polygon(vertices, !*open, width, self.stroke_colour);
                }
            }
            ShapeKind::Line { from, to, line_width } => {
                surface.stroke_polygon(&[*from, *to], false, *line_width, self.stroke_colour);
            }
        }
    }

    /// Outline of the bounding box plus a handle on every snap point.
    pub fn draw_selection(&self, surface: &mut dyn Surface, style: &SelectionStyle) {
        let Some(bbox) = self.bounding_box() else {
            return;
        };
        surface.stroke_polygon(&bbox.corners(), true, style.width, style.color);
        let half = style.width * 2.0;
        for p in self.points() {
            surface.fill_rect(Rect::new(p.x - half, p.y - half, half * 2.0, half * 2.0), style.color);
        }
    }

    // ── visibility bookkeeping ────────────────────────────────────────────

    /// Brings this shape's entries in the floor's vision blocker and vision
    /// source lists in line with its flags and auras.
    ///
    /// With `recalculate`, a changed blocker list triggers a vision
    /// recomputation for the floor.
    pub fn check_vision_sources(&self, visibility: &mut dyn Visibility, recalculate: bool) {
        let floor = self.floor.as_str();
        let target = TriangulationTarget::Vision;

        let present = visibility.blockers(target, floor).iter().position(|id| *id == self.id);
        let changed = match (self.vision_obstruction, present) {
            (true, None) => {
                visibility.add_blocker(target, self.id, floor);
                true
            }
            (false, Some(i)) => {
                visibility.slice_blockers(target, i, floor);
                true
            }
            _ => false,
        };
        if changed && recalculate {
            visibility.recalculate_vision(floor);
        }

        // Drop sources whose aura vanished or stopped emitting, newest first so
        // indices stay valid.
        let stale: Vec<usize> = visibility
            .vision_sources(floor)
            .iter()
            .enumerate()
            .filter(|(_, s)| s.shape == self.id)
            .filter(|(_, s)| !self.auras.iter().any(|a| a.id == s.aura && a.vision_source))
            .map(|(i, _)| i)
            .collect();
        for i in stale.into_iter().rev() {
            visibility.slice_vision_sources(i, floor);
        }

        for aura in self.auras.iter().filter(|a| a.vision_source) {
            let source = VisionSource { shape: self.id, aura: aura.id };
            if !visibility.vision_sources(floor).contains(&source) {
                visibility.add_vision_source(source, floor);
            }
        }
    }

    /// Sets the movement obstruction flag and mirrors it into the floor's
    /// movement blocker list.
    pub fn set_movement_block(&mut self, blocking: bool, visibility: &mut dyn Visibility, recalculate: bool) {
        self.movement_obstruction = blocking;

        let floor = self.floor.as_str();
        let target = TriangulationTarget::Movement;
        let present = visibility.blockers(target, floor).iter().position(|id| *id == self.id);
        let changed = match (blocking, present) {
            (true, None) => {
                visibility.add_blocker(target, self.id, floor);
                true
            }
            (false, Some(i)) => {
                visibility.slice_blockers(target, i, floor);
                true
            }
            _ => false,
        };
        if changed && recalculate {
            visibility.recalculate_movement(floor);
        }
    }

    // ── wire format ───────────────────────────────────────────────────────

    pub fn as_dict(&self) -> ServerShape {
        let mut geometry = match serde_json::to_value(&self.kind) {
            Ok(Value::Object(map)) => map,
            // Internally tagged struct variants always serialize to an object.
            _ => Map::new(),
        };
        geometry.remove("type_");

        ServerShape {
            uuid: self.id,
            type_: self.kind.type_tag().to_owned(),
            layer: self.layer.clone(),
            floor: self.floor.clone(),
            owners: self.owners.clone(),
            is_token: self.is_token,
            movement_obstruction: self.movement_obstruction,
            vision_obstruction: self.vision_obstruction,
            annotation: self.annotation.clone(),
            labels: self.labels.clone(),
            options: self.options.clone(),
            fill_colour: self.fill_colour,
            stroke_colour: self.stroke_colour,
            stroke_width: self.stroke_width,
            blend: self.blend,
            auras: self.auras.clone(),
            geometry,
        }
    }

    /// Rebuilds a shape from its wire dictionary.
    pub fn from_dict(dict: &ServerShape) -> Result<Shape, ShapeError> {
        if !ShapeKind::TYPE_TAGS.contains(&dict.type_.as_str()) {
            return Err(ShapeError::UnknownType(dict.type_.clone()));
        }

        let mut tagged = dict.geometry.clone();
        tagged.insert("type_".to_owned(), Value::String(dict.type_.clone()));
        let kind: ShapeKind = serde_json::from_value(Value::Object(tagged))
            .map_err(|source| ShapeError::Geometry { type_: dict.type_.clone(), source })?;

        Ok(Shape {
            id: dict.uuid,
            kind,
            layer: dict.layer.clone(),
            floor: dict.floor.clone(),
            owners: dict.owners.clone(),
            is_token: dict.is_token,
            movement_obstruction: dict.movement_obstruction,
            vision_obstruction: dict.vision_obstruction,
            annotation: dict.annotation.clone(),
            labels: dict.labels.clone(),
            options: dict.options.clone(),
            fill_colour: dict.fill_colour,
            stroke_colour: dict.stroke_colour,
            stroke_width: dict.stroke_width,
            blend: dict.blend,
            auras: dict.auras.clone(),
        })
    }
}

/// Wire dictionary of a shape.
///
/// `type_` is kept raw so snapshots from newer peers still deserialize; the
/// kind-specific fields land in `geometry`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerShape {
    pub uuid: ShapeId,
    pub type_: String,
    #[serde(default)]
    pub layer: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub is_token: bool,
    #[serde(default)]
    pub movement_obstruction: bool,
    #[serde(default)]
    pub vision_obstruction: bool,
    #[serde(default)]
    pub annotation: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub options: BTreeMap<String, Value>,
    #[serde(default = "default_fill", with = "crate::colour")]
    pub fill_colour: Color,
    #[serde(default = "default_stroke", with = "crate::colour")]
    pub stroke_colour: Color,
    #[serde(default)]
    pub stroke_width: f32,
    #[serde(default)]
    pub blend: BlendMode,
    #[serde(default)]
    pub auras: Vec<Aura>,
    #[serde(flatten)]
    pub geometry: Map<String, Value>,
}

fn default_fill() -> Color {
    Color::from_hex(DEFAULT_FILL).unwrap_or_default()
}

fn default_stroke() -> Color {
    Color::from_hex(DEFAULT_STROKE).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visibility::VisibilityStore;

    fn on_floor(mut shape: Shape, floor: &str) -> Shape {
        shape.floor = floor.to_owned();
        shape
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn rect_points_are_corners() {
        let s = Shape::rect(Vec2::new(1.0, 2.0), 3.0, 4.0);
        assert_eq!(
            s.points(),
            vec![Vec2::new(1.0, 2.0), Vec2::new(4.0, 2.0), Vec2::new(4.0, 6.0), Vec2::new(1.0, 6.0)]
        );
    }

    #[test]
    fn circle_bounds_cover_radius() {
        let s = Shape::circle(Vec2::new(10.0, 10.0), 2.0);
        assert_eq!(s.points(), vec![Vec2::new(10.0, 10.0)]);
        assert_eq!(s.bounding_box(), Some(Rect::new(8.0, 8.0, 4.0, 4.0)));
    }

    #[test]
    fn empty_polygon_is_never_visible() {
        let s = Shape::polygon(Vec::new());
        assert!(s.points().is_empty());
        assert!(!s.visible_in_canvas(Rect::new(-1e6, -1e6, 2e6, 2e6)));
    }

    #[test]
    fn aura_reach_counts_for_visibility() {
        let viewport = Rect::new(0.0, 0.0, 10.0, 10.0);
        let plain = Shape::circle(Vec2::new(20.0, 5.0), 1.0);
        let lit = plain.clone().with_aura(Aura::new(5.0, Color::black()).with_dim(10.0));
        assert!(!plain.visible_in_canvas(viewport));
        assert!(lit.visible_in_canvas(viewport));
    }

    #[test]
    fn skip_draw_reads_option_bag() {
        let s = Shape::circle(Vec2::zero(), 1.0);
        assert!(!s.skip_draw());
        assert!(s.clone().with_option(SKIP_DRAW, true).skip_draw());
        assert!(!s.with_option(SKIP_DRAW, "yes").skip_draw());
    }

    // ── wire format ───────────────────────────────────────────────────────

    #[test]
    fn dict_carries_type_tag_and_flat_geometry() {
        let s = Shape::line(Vec2::zero(), Vec2::new(5.0, 0.0), 3.0).with_owner("alice");
        let json = serde_json::to_value(s.as_dict()).unwrap();

        assert_eq!(json["type_"], "line");
        assert_eq!(json["from"], serde_json::json!([0.0, 0.0]));
        assert_eq!(json["line_width"], 3.0);
        assert_eq!(json["owners"], serde_json::json!(["alice"]));
        assert_eq!(json["fill_colour"], "#000000");
    }

    #[test]
    fn from_dict_rebuilds_kind_and_metadata() {
        let original = Shape::polygon(vec![Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)])
            .blocking_vision()
            .with_label(Label::new("team", "red"))
            .with_aura(Aura::new(3.0, Color::from_srgb_u8(255, 200, 0, 255)).emitting_vision());

        let rebuilt = Shape::from_dict(&original.as_dict()).unwrap();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn minimal_snapshot_record_parses() {
        let raw = r#"{
            "uuid": "5b0f0d5e-3f57-4c21-9f5b-4f4a1b2e7c11",
            "type_": "circle",
            "center": [4, 4],
            "radius": 1.5
        }"#;
        let dict: ServerShape = serde_json::from_str(raw).unwrap();
        let shape = Shape::from_dict(&dict).unwrap();

        assert_eq!(shape.kind, ShapeKind::Circle { center: Vec2::new(4.0, 4.0), radius: 1.5 });
        assert_eq!(shape.fill_colour, Color::black());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let mut dict = Shape::circle(Vec2::zero(), 1.0).as_dict();
        dict.type_ = "hexagon".into();
        assert!(matches!(Shape::from_dict(&dict), Err(ShapeError::UnknownType(t)) if t == "hexagon"));
    }

    #[test]
    fn known_type_with_bad_geometry_is_rejected() {
        let mut dict = Shape::circle(Vec2::zero(), 1.0).as_dict();
        dict.geometry.remove("radius");
        assert!(matches!(Shape::from_dict(&dict), Err(ShapeError::Geometry { .. })));
    }

    // ── visibility bookkeeping ────────────────────────────────────────────

    #[test]
    fn vision_blocker_registers_once() {
        let mut vis = VisibilityStore::new();
        let s = on_floor(Shape::rect(Vec2::zero(), 1.0, 1.0).blocking_vision(), "ground");

        s.check_vision_sources(&mut vis, true);
        s.check_vision_sources(&mut vis, true);

        assert_eq!(vis.blockers(TriangulationTarget::Vision, "ground"), &[s.id()]);
        assert_eq!(vis.requests().len(), 1);
    }

    #[test]
    fn clearing_vision_flag_unregisters() {
        let mut vis = VisibilityStore::new();
        let mut s = on_floor(Shape::rect(Vec2::zero(), 1.0, 1.0).blocking_vision(), "ground");
        s.check_vision_sources(&mut vis, false);

        s.vision_obstruction = false;
        s.check_vision_sources(&mut vis, false);

        assert!(vis.blockers(TriangulationTarget::Vision, "ground").is_empty());
        assert!(vis.requests().is_empty());
    }

    #[test]
    fn vision_auras_track_sources() {
        let mut vis = VisibilityStore::new();
        let mut s = on_floor(
            Shape::circle(Vec2::zero(), 1.0)
                .with_aura(Aura::new(5.0, Color::black()).emitting_vision())
                .with_aura(Aura::new(2.0, Color::black())),
            "ground",
        );
        s.check_vision_sources(&mut vis, false);
        assert_eq!(vis.vision_sources("ground"), &[VisionSource { shape: s.id(), aura: s.auras[0].id }]);

        s.auras[0].vision_source = false;
        s.check_vision_sources(&mut vis, false);
        assert!(vis.vision_sources("ground").is_empty());
    }

    #[test]
    fn movement_block_toggles_and_recalculates() {
        let mut vis = VisibilityStore::new();
        let mut s = on_floor(Shape::rect(Vec2::zero(), 1.0, 1.0), "ground");

        s.set_movement_block(true, &mut vis, true);
        assert!(s.movement_obstruction);
        assert_eq!(vis.blockers(TriangulationTarget::Movement, "ground"), &[s.id()]);

        s.set_movement_block(false, &mut vis, false);
        assert!(vis.blockers(TriangulationTarget::Movement, "ground").is_empty());
        assert_eq!(vis.requests().len(), 1);
    }
}
