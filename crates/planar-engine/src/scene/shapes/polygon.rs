use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Polygon / polyline draw payload.
///
/// An open path (`closed == false`) is never filled; `fill` is ignored for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub closed: bool,
    pub fill: Option<Color>,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a closed, filled polygon.
    pub fn push_polygon(
        &mut self,
        z: ZIndex,
        points: impl Into<Vec<Vec2>>,
        fill: Option<Color>,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::Polygon(PolygonCmd {
            points: points.into(),
            closed: true,
            fill,
            border,
        }));
    }

    /// Records an open or closed outline.
    pub fn push_polyline(&mut self, z: ZIndex, points: impl Into<Vec<Vec2>>, closed: bool, border: Border) {
        self.push(z, DrawCmd::Polygon(PolygonCmd {
            points: points.into(),
            closed,
            fill: None,
            border: Some(border),
        }));
    }
}
