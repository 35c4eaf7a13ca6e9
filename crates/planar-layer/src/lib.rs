//! Planar layer core.
//!
//! A [`Layer`] is one floor-scoped, z-ordered collection of [`Shape`]s. Every
//! membership change keeps the derived bookkeeping in step:
//!
//! - the layer's own snap-point index ([`PointIndex`])
//! - scene-wide lists in [`SceneRegistry`] (identity lookup, owned tokens, annotations)
//! - per-floor vision sources and blockers behind the [`Visibility`] trait
//! - the outbound [`Relay`] that mirrors changes to other participants
//!
//! Drawing is dirty-flag driven: mutations invalidate, [`Layer::draw`] does the
//! work at most once per invalidation and wakes anyone parked on
//! [`Layer::wait_valid`].
//!
//! ```rust,ignore
//! let (mut services, relay_rx) = SceneServices::new("alice", floors);
//! let mut layer = Layer::new("tokens", "ground");
//! let mut ctx = services.ctx();
//! layer.add_shape(&mut ctx, Shape::circle(Vec2::new(5.0, 5.0), 2.0), SyncMode::FullSync, InvalidationMode::Normal, true);
//! layer.draw(&mut canvas, &ctx, true);
//! ```

mod colour;
pub mod config;
pub mod context;
pub mod error;
pub mod floor;
pub mod layer;
pub mod point_index;
pub mod registry;
pub mod relay;
pub mod shape;
pub mod signal;
pub mod surface;
pub mod visibility;

pub use config::{LayerConfig, RemovalLightPolicy};
pub use context::{SceneCtx, SceneServices};
pub use error::{ShapeError, WaitError};
pub use floor::{Floor, FloorPlan};
pub use layer::{InvalidationMode, Layer, SyncMode, WaitValid};
pub use point_index::{PointIndex, PointKey};
pub use registry::{LabelFilters, SceneRegistry, ShapeLocation};
pub use relay::{Relay, RelayEvent, RelayReceiver};
pub use shape::{Aura, AuraId, Label, LabelId, ServerShape, Shape, ShapeId, ShapeKind};
pub use signal::SelectionSignal;
pub use surface::{Canvas, SelectionStyle, Surface};
pub use visibility::{Recalculation, TriangulationTarget, Visibility, VisibilityStore, VisionSource};
