use super::{InvalidationMode, Layer, SyncMode};
use crate::context::SceneCtx;
use crate::registry::ShapeLocation;
use crate::relay::RelayEvent;
use crate::shape::{ServerShape, Shape, ShapeId};
use crate::visibility::TriangulationTarget;

impl Layer {
    /// Appends `shape` on top of the layer and registers it everywhere it is
    /// looked up: identity registry, visibility lists, snap points, owned
    /// tokens and annotations.
    ///
    /// `invalidate` also decides whether visibility changes ask for a
    /// recomputation right away. Only [`InvalidationMode::WithLight`] touches
    /// the floor's lighting.
    pub fn add_shape(
        &mut self,
        ctx: &mut SceneCtx<'_>,
        mut shape: Shape,
        sync: SyncMode,
        invalidate: InvalidationMode,
        snappable: bool,
    ) -> ShapeId {
        let id = shape.id();
        if self.contains(id) {
            log::error!("shape {id} is already on layer {}", self.name);
            return id;
        }

        shape.layer.clone_from(&self.name);
        shape.floor.clone_from(&self.floor);
        ctx.registry.insert(id, ShapeLocation { floor: self.floor.clone(), layer: self.name.clone() });

        let recalculate = invalidate.invalidates();
        shape.check_vision_sources(&mut *ctx.visibility, recalculate);
        let blocking = shape.movement_obstruction;
        shape.set_movement_block(blocking, &mut *ctx.visibility, recalculate);

        if snappable {
            self.points.register(id, &shape.points());
        }
        if shape.is_token && shape.owned_by(ctx.registry.local_user()) {
            ctx.registry.push_owned_token(id);
        }
        if shape.has_annotation() {
            ctx.registry.push_annotation(id);
        }
        if sync.is_synced() {
            ctx.relay.emit(RelayEvent::ShapeAdded { shape: shape.as_dict(), temporary: sync.is_temporary() });
        }

        log::debug!("added {} {id} to {}/{}", shape.kind.type_tag(), self.floor, self.name);
        self.shapes.push(shape);

        if recalculate {
            self.invalidate(ctx, invalidate != InvalidationMode::WithLight);
        }
        id
    }

    /// Loads a server snapshot, in order, without mirroring it back.
    ///
    /// The first record that fails to rebuild stops the load; earlier records
    /// stay added. The selection is cleared either way. Returns how many shapes
    /// were added; records already on the layer do not count.
    pub fn set_shapes(&mut self, ctx: &mut SceneCtx<'_>, shapes: &[ServerShape]) -> usize {
        let mut added = 0;
        for dict in shapes {
            match Shape::from_dict(dict) {
                Ok(shape) => {
                    let before = self.shapes.len();
                    self.add_shape(ctx, shape, SyncMode::NoSync, InvalidationMode::No, true);
                    added += self.shapes.len() - before;
                }
                Err(err) => {
                    log::warn!(
                        "{err}; {} of {} snapshot records loaded on {}/{}",
                        added,
                        shapes.len(),
                        self.floor,
                        self.name
                    );
                    break;
                }
            }
        }
        self.clear_selection(ctx);
        added
    }

    /// Takes `id` off the layer and out of every scene-wide lookup, handing the
    /// shape back. Returns `None`, changing nothing, for non-members.
    ///
    /// Blocker lists that lose an entry trigger their recomputation. Whether the
    /// floor's lighting is recomposed follows
    /// [`LayerConfig::removal_light_policy`](crate::LayerConfig::removal_light_policy).
    pub fn remove_shape(&mut self, ctx: &mut SceneCtx<'_>, id: ShapeId, sync: SyncMode) -> Option<Shape> {
        let Some(index) = self.index_of(id) else {
            log::error!("attempted to remove shape {id} which is not on layer {}", self.name);
            return None;
        };
        let shape = self.shapes.remove(index);

        if sync.is_synced() {
            ctx.relay.emit(RelayEvent::ShapeRemoved { shape: shape.as_dict(), temporary: sync.is_temporary() });
        }

        let floor = self.floor.as_str();
        let visibility = &mut *ctx.visibility;

        let sources: Vec<usize> = visibility
            .vision_sources(floor)
            .iter()
            .enumerate()
            .filter(|(_, s)| s.shape == id)
            .map(|(i, _)| i)
            .collect();
        for i in sources.into_iter().rev() {
            visibility.slice_vision_sources(i, floor);
        }

        let mut recalculate = Vec::with_capacity(2);
        for target in [TriangulationTarget::Vision, TriangulationTarget::Movement] {
            if let Some(i) = visibility.blockers(target, floor).iter().position(|b| *b == id) {
                visibility.slice_blockers(target, i, floor);
                recalculate.push(target);
            }
        }

        ctx.registry.remove_annotation(id);
        ctx.registry.remove_owned_token(id);
        ctx.registry.remove(id);

        self.points.unregister(id, &shape.points());
        self.selection.retain(|s| *s != id);

        for target in recalculate {
            visibility.recalculate(target, floor);
        }

        log::debug!("removed {id} from {}/{}", self.floor, self.name);
        let skip_light = self.config.removal_light_policy.skip_light_update(sync);
        self.invalidate(ctx, skip_light);
        Some(shape)
    }

    /// Moves `id` to `destination` in draw order, clamped to the top.
    ///
    /// Returns `false` without side effects when `id` is not a member or is
    /// already there.
    pub fn move_shape_order(&mut self, ctx: &mut SceneCtx<'_>, id: ShapeId, destination: usize, sync: bool) -> bool {
        let Some(old) = self.index_of(id) else {
            log::error!("attempted to reorder shape {id} which is not on layer {}", self.name);
            return false;
        };
        let destination = destination.min(self.shapes.len() - 1);
        if old == destination {
            return false;
        }

        let shape = self.shapes.remove(old);
        self.shapes.insert(destination, shape);

        if sync {
            let shape = self.shapes[destination].as_dict();
            ctx.relay.emit(RelayEvent::ShapeOrderChanged { shape, index: destination });
        }
        self.invalidate(ctx, true);
        true
    }

    /// Re-reads the current points of `id` into the snap index after its
    /// geometry changed.
    pub fn update_shape_points(&mut self, id: ShapeId) -> bool {
        match self.shapes.iter().find(|s| s.id() == id) {
            Some(shape) => {
                self.points.update(id, &shape.points());
                true
            }
            None => false,
        }
    }
}
