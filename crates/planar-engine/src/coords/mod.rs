//! Coordinate and geometry types shared by the layer core and surfaces.
//!
//! Canonical CPU space:
//! - World units (grid-independent)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Surfaces convert to pixels through a [`Viewport`].

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
