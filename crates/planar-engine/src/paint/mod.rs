//! Paint model shared between the layer core and surfaces.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - blend (composite) modes carried by recorded draw items
//!
//! Geometry types remain in `coords`.

pub mod blend;
pub mod color;

pub use blend::BlendMode;
pub use color::Color;
