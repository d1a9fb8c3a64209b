//! Minar engine crate.
//!
//! Renderer-agnostic primitives shared by the clock display layers: geometry,
//! paint, the draw-stream scene types, wall-clock time sources and the
//! periodic ticker that drives rendering.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod time;
