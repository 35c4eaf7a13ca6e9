use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use futures::future::{self, Either};
use futures::FutureExt;
use planar_engine::paint::{BlendMode, Color};

use super::Layer;
use crate::context::SceneCtx;
use crate::error::WaitError;
use crate::floor::FOW_LAYER;
use crate::shape::Shape;
use crate::surface::{SelectionStyle, Surface};

/// Darkening laid over the top layer of the floor below the viewed one.
const LOWER_FLOOR_SHADOW: (f32, f32, f32, f32) = (0.0, 0.0, 0.0, 0.3);

impl Layer {
    /// Schedules a redraw. Unless `skip_light_update`, the floor's lighting is
    /// recomposed too.
    pub fn invalidate(&mut self, ctx: &mut SceneCtx<'_>, skip_light_update: bool) {
        self.valid = false;
        if !skip_light_update {
            ctx.visibility.invalidate_light(&self.floor);
        }
    }

    /// Wipes the surface.
    pub fn clear(&self, surface: &mut dyn Surface) {
        surface.clear();
    }

    /// Redraws the layer if anything changed since the last draw.
    ///
    /// Auras of every drawable shape go first, then bodies, then the selection
    /// highlight, so no aura covers the body of a shape above it. A hidden
    /// layer paints nothing but still settles. Returns whether the layer was
    /// dirty; every [`wait_valid`](Self::wait_valid) future registered so far
    /// resolves when it was.
    pub fn draw(&mut self, surface: &mut dyn Surface, ctx: &SceneCtx<'_>, do_clear: bool) -> bool {
        if self.valid {
            return false;
        }

        let blend = surface.blend_mode();
        if do_clear {
            surface.clear();
        }
        let drawn = if self.visible { self.paint(surface, ctx, blend) } else { 0 };

        surface.set_blend_mode(blend);
        self.valid = true;
        log::trace!("drew {drawn}/{} shapes on {}/{}", self.shapes.len(), self.floor, self.name);

        for waiter in self.waiters.drain(..) {
            // The waiting side may have given up; nothing to tell it then.
            let _ = waiter.send(());
        }
        true
    }

    /// Shape passes, selection and lower-floor shadow. Returns how many bodies
    /// were drawn.
    fn paint(&self, surface: &mut dyn Surface, ctx: &SceneCtx<'_>, blend: BlendMode) -> usize {
        let world = surface.viewport().world_rect();
        let active_layer = ctx.floors.active_layer(&self.floor);
        let drawable = |shape: &Shape| match active_layer {
            Some(active) if !shape.skip_draw() && shape.visible_in_canvas(world) => {
                self.name != FOW_LAYER || active == self.name
            }
            _ => false,
        };

        for shape in self.shapes.iter().filter(|s| drawable(*s)) {
            shape.draw_auras(surface);
        }

        let filters = &ctx.registry.filters;
        let mut drawn = 0usize;
        for shape in self.shapes.iter().filter(|s| drawable(*s) && filters.admits(s.labels.iter().map(|l| &l.id))) {
            shape.draw(surface);
            drawn += 1;
        }

        surface.set_blend_mode(blend);
        let style = SelectionStyle { color: self.config.selection_color, width: self.config.selection_width };
        for shape in self.selection.iter().filter_map(|id| self.shapes.iter().find(|s| s.id() == *id)) {
            shape.draw_selection(surface, &style);
        }

        if let Some((floor, layer)) = ctx.floors.lower_floor_top_layer() {
            if floor == self.floor && layer == self.name {
                let (r, g, b, a) = LOWER_FLOOR_SHADOW;
                surface.fill_rect(world, Color::from_straight(r, g, b, a));
            }
        }
        drawn
    }

    /// Future resolving once the next [`draw`](Self::draw) completes.
    ///
    /// Dropping the future cancels the wait. If the layer goes away first the
    /// future yields [`WaitError::LayerDropped`].
    pub fn wait_valid(&mut self) -> WaitValid {
        self.waiters.retain(|tx| !tx.is_canceled());
        let (tx, rx) = oneshot::channel();
        self.waiters.push(tx);
        WaitValid { rx }
    }

    /// Waiters still expecting a draw.
    pub fn pending_waiters(&self) -> usize {
        self.waiters.iter().filter(|tx| !tx.is_canceled()).count()
    }
}

/// Returned by [`Layer::wait_valid`].
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct WaitValid {
    rx: oneshot::Receiver<()>,
}

impl WaitValid {
    /// Races the wait against `timer`, a sleep from whatever runtime the host
    /// drives the scene with.
    pub async fn or_timeout<T: Future>(self, timer: T) -> Result<(), WaitError> {
        let timer = std::pin::pin!(timer);
        match future::select(self, timer).await {
            Either::Left((drawn, _)) => drawn,
            Either::Right(_) => Err(WaitError::TimedOut),
        }
    }
}

impl Future for WaitValid {
    type Output = Result<(), WaitError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.rx.poll_unpin(cx).map(|r| r.map_err(|_| WaitError::LayerDropped))
    }
}
