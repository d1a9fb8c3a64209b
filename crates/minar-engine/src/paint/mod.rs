//! Paint model shared between the clock layers and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;
