//! Planar engine crate.
//!
//! Renderer-agnostic primitives shared by the scene layer core and whatever
//! presents its output: geometry, paint, the recorded draw stream, logging.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
