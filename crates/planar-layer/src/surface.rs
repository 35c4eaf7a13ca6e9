use planar_engine::coords::{Rect, Vec2, Viewport};
use planar_engine::paint::{BlendMode, Color};
use planar_engine::scene::{Border, DrawList, ZIndex};

/// Drawing target a layer renders into.
///
/// Coordinates are world units; the surface owns the mapping to pixels via its
/// [`Viewport`]. Blend mode is sticky state, like a canvas composite operation.
pub trait Surface {
    fn viewport(&self) -> Viewport;

    /// Wipes everything drawn so far.
    fn clear(&mut self);

    fn blend_mode(&self) -> BlendMode;
    fn set_blend_mode(&mut self, mode: BlendMode);

    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn stroke_polygon(&mut self, points: &[Vec2], closed: bool, width: f32, color: Color);
}

/// Colour and line width used to highlight selected shapes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SelectionStyle {
    pub color: Color,
    pub width: f32,
}

/// [`Surface`] that records into the engine's [`DrawList`].
///
/// Every call gets the next z so paint order equals call order, which is what
/// the two-pass layer draw relies on.
#[derive(Debug)]
pub struct Canvas {
    draw_list: DrawList,
    viewport: Viewport,
    z: ZIndex,
}

impl Canvas {
    pub fn new(viewport: Viewport) -> Self {
        Self { draw_list: DrawList::new(), viewport, z: ZIndex::default() }
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    #[inline]
    pub fn draw_list_mut(&mut self) -> &mut DrawList {
        &mut self.draw_list
    }

    /// Pans / zooms / resizes. Callers are expected to invalidate their layers.
    #[inline]
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Records one command at the next z, scissored to the visible world.
    fn record(&mut self, push: impl FnOnce(&mut DrawList, ZIndex)) {
        let z = self.z;
        self.z = self.z.next();
        self.draw_list.with_clip(self.viewport.world_rect(), |list| push(list, z));
    }
}

impl Surface for Canvas {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) {
        self.draw_list.clear();
        self.z = ZIndex::default();
    }

    fn blend_mode(&self) -> BlendMode {
        self.draw_list.blend()
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.draw_list.set_blend(mode);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.record(|list, z| list.fill_rect(z, rect, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.record(|list, z| list.fill_circle(z, center, radius, color));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.record(|list, z| list.push_polygon(z, points, Some(color), None));
    }

    fn stroke_polygon(&mut self, points: &[Vec2], closed: bool, width: f32, color: Color) {
        self.record(|list, z| list.push_polyline(z, points, closed, Border::new(width, color)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_engine::scene::DrawCmd;

    #[test]
    fn records_in_call_order() {
        let mut canvas = Canvas::new(Viewport::new(100.0, 100.0));
        let c = Color::black();
        canvas.fill_circle(Vec2::zero(), 1.0, c);
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), c);
        canvas.stroke_polygon(&[Vec2::zero(), Vec2::new(1.0, 1.0)], false, 2.0, c);

        let kinds: Vec<_> = canvas.draw_list_mut().iter_in_paint_order().map(|i| i.cmd.kind()).collect();
        assert_eq!(kinds, vec!["circle", "rect", "polygon"]);
    }

    #[test]
    fn clear_restarts_z() {
        let mut canvas = Canvas::new(Viewport::new(10.0, 10.0));
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::black());
        canvas.clear();
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::black());

        assert_eq!(canvas.draw_list().len(), 1);
        assert_eq!(canvas.draw_list().items()[0].key.z, ZIndex(0));
        assert!(matches!(canvas.draw_list().items()[0].cmd, DrawCmd::Rect(_)));
    }

    #[test]
    fn items_are_clipped_to_visible_world() {
        let viewport = Viewport::new(100.0, 50.0).with_pan_zoom(Vec2::new(10.0, 0.0), 2.0);
        let mut canvas = Canvas::new(viewport);
        canvas.fill_circle(Vec2::new(20.0, 20.0), 3.0, Color::black());

        assert_eq!(canvas.draw_list().items()[0].clip_rect, Some(Rect::new(10.0, 0.0, 50.0, 25.0)));
    }
}
