use super::Vec2;

/// Axis-aligned rectangle in world units (top-left origin).
///
/// Negative sizes are tolerated; every query normalizes first.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Smallest rectangle containing every point, or `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Vec2>>(points: I) -> Option<Rect> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (lo, hi) = iter.fold((first, first), |(lo, hi), p| {
            (Vec2::new(lo.x.min(p.x), lo.y.min(p.y)), Vec2::new(hi.x.max(p.x), hi.y.max(p.y)))
        });
        Some(Rect::from_origin_size(lo, hi - lo))
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    /// Same area with non-negative width and height.
    #[inline]
    pub fn normalized(self) -> Self {
        let (x0, x1) = ordered(self.origin.x, self.origin.x + self.size.x);
        let (y0, y1) = ordered(self.origin.y, self.origin.y + self.size.y);
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Area shared with `other`. Touching edges do not count.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let (a, b) = (self.normalized(), other.normalized());
        let lo = Vec2::new(a.origin.x.max(b.origin.x), a.origin.y.max(b.origin.y));
        let hi = Vec2::new(a.max().x.min(b.max().x), a.max().y.min(b.max().y));
        let size = hi - lo;
        (size.x > 0.0 && size.y > 0.0).then(|| Rect::from_origin_size(lo, size))
    }

    /// Closed overlap test: unlike [`intersect`](Self::intersect), touching edges
    /// and degenerate (zero-width) rects count.
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        let (a, b) = (self.normalized(), other.normalized());
        a.origin.x <= b.max().x && b.origin.x <= a.max().x && a.origin.y <= b.max().y && b.origin.y <= a.max().y
    }

    /// Grows the rectangle by `d` on every side.
    #[inline]
    pub fn inflate(self, d: f32) -> Rect {
        let r = self.normalized();
        Rect::new(r.origin.x - d, r.origin.y - d, r.size.x + 2.0 * d, r.size.y + 2.0 * d)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    /// Corners clockwise from the origin.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        let (min, max) = (self.min(), self.max());
        [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)]
    }
}

#[inline]
fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}
