use super::{Rect, Vec2};

/// Canvas size in pixels plus the pan/zoom that maps it onto the scene.
///
/// `offset` is the world position shown at the canvas' top-left corner;
/// `zoom` is pixels per world unit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub offset: Vec2,
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height, offset: Vec2::zero(), zoom: 1.0 }
    }

    #[inline]
    pub const fn with_pan_zoom(mut self, offset: Vec2, zoom: f32) -> Self {
        self.offset = offset;
        self.zoom = zoom;
        self
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.width.is_finite()
            && self.height.is_finite()
            && self.zoom > 0.0
    }

    /// The part of the scene currently on screen, in world units.
    #[inline]
    pub fn world_rect(self) -> Rect {
        let zoom = if self.zoom > 0.0 { self.zoom } else { 1.0 };
        Rect::from_origin_size(self.offset, Vec2::new(self.width, self.height) / zoom)
    }
}
