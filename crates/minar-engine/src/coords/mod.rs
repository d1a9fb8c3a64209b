//! Geometry types in logical pixels.
//!
//! Screen convention: origin at the top-left, y grows downward. Rotations are
//! therefore clockwise on screen, which is exactly the direction clock hands
//! sweep.

mod vec2;

pub use vec2::Vec2;
