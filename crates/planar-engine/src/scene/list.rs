use crate::coords::Rect;
use crate::paint::BlendMode;

use super::{DrawCmd, SortKey, ZIndex};

/// One recorded command together with the state it was recorded under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// World-space scissor; `None` draws everywhere.
    pub clip_rect: Option<Rect>,
    pub blend: BlendMode,
}

/// Recorded draw stream for one frame.
///
/// Items keep insertion order in [`items`](Self::items); [`iter_in_paint_order`](Self::iter_in_paint_order)
/// yields them back-to-front by `(z, insertion)`. The paint order is cached and
/// only rebuilt after a push.
///
/// Clip and blend are recording state: every pushed item is stamped with the
/// clip of the innermost [`with_clip`](Self::with_clip) scope and the current
/// [`blend`](Self::blend), which sticks until changed.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    order: Vec<usize>,
    order_stale: bool,
    clip: Option<Rect>,
    blend: BlendMode,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every item. Blend mode survives; it is state, not content.
    pub fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
        self.order_stale = false;
        self.clip = None;
    }

    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn blend(&self) -> BlendMode {
        self.blend
    }

    #[inline]
    pub fn set_blend(&mut self, blend: BlendMode) {
        self.blend = blend;
    }

    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        self.items.push(DrawItem { key: SortKey::new(z, order), cmd, clip_rect: self.clip, blend: self.blend });
        self.order_stale = true;
    }

    /// Runs `record` with pushes scissored to `rect`, intersected with any
    /// enclosing scope. Disjoint scopes clip to an empty rect so consumers skip
    /// the items.
    pub fn with_clip<R>(&mut self, rect: Rect, record: impl FnOnce(&mut Self) -> R) -> R {
        let outer = self.clip;
        let inner = match outer {
            None => rect.normalized(),
            Some(parent) => parent.intersect(rect).unwrap_or_default(),
        };
        self.clip = Some(inner);
        let out = record(self);
        self.clip = outer;
        out
    }

    /// Items back-to-front.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.order_stale {
            self.order.clear();
            self.order.extend(0..self.items.len());
            let items = &self.items;
            self.order.sort_by_key(|&i| items[i].key);
            self.order_stale = false;
        }
        self.order.iter().map(|&i| &self.items[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn red() -> Color {
        Color::from_srgb_u8(255, 0, 0, 255)
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.fill_rect(ZIndex(2), Rect::new(0.0, 0.0, 1.0, 1.0), red());
        list.fill_circle(ZIndex(1), Vec2::zero(), 1.0, red());
        list.fill_rect(ZIndex(1), Rect::new(0.0, 0.0, 2.0, 2.0), red());

        let kinds: Vec<_> = list.iter_in_paint_order().map(|i| (i.key.z.0, i.cmd.kind())).collect();
        assert_eq!(kinds, vec![(1, "circle"), (1, "rect"), (2, "rect")]);
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[test]
    fn blend_mode_sticks_until_changed() {
        let mut list = DrawList::new();
        list.set_blend(BlendMode::DestinationOut);
        list.fill_circle(ZIndex(0), Vec2::zero(), 1.0, red());
        list.set_blend(BlendMode::SourceOver);
        list.fill_circle(ZIndex(1), Vec2::zero(), 1.0, red());

        assert_eq!(list.items()[0].blend, BlendMode::DestinationOut);
        assert_eq!(list.items()[1].blend, BlendMode::SourceOver);
    }

    #[test]
    fn nested_clips_intersect_and_unwind() {
        let mut list = DrawList::new();
        list.with_clip(Rect::new(0.0, 0.0, 10.0, 10.0), |list| {
            list.with_clip(Rect::new(5.0, 5.0, 10.0, 10.0), |list| {
                list.fill_rect(ZIndex(0), Rect::new(0.0, 0.0, 1.0, 1.0), red());
            });
            list.with_clip(Rect::new(20.0, 20.0, 1.0, 1.0), |list| {
                list.fill_rect(ZIndex(1), Rect::new(0.0, 0.0, 1.0, 1.0), red());
            });
        });
        list.fill_rect(ZIndex(2), Rect::new(0.0, 0.0, 1.0, 1.0), red());

        assert_eq!(list.items()[0].clip_rect, Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
        assert_eq!(list.items()[1].clip_rect, Some(Rect::default()));
        assert_eq!(list.items()[2].clip_rect, None);
    }

    #[test]
    fn clear_keeps_blend_state() {
        let mut list = DrawList::new();
        list.set_blend(BlendMode::Multiply);
        list.fill_rect(ZIndex(0), Rect::new(0.0, 0.0, 1.0, 1.0), red());
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.blend(), BlendMode::Multiply);
    }
}
