use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Solid disc, used for token bodies and aura rings.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl CircleCmd {
    pub fn bounds(&self) -> Rect {
        let r = self.radius.abs();
        Rect::new(self.center.x - r, self.center.y - r, 2.0 * r, 2.0 * r)
    }
}

impl DrawList {
    pub fn fill_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push(z, DrawCmd::Circle(CircleCmd { center, radius, color }));
    }
}
