//! Analog face render surface.

use minar_engine::coords::Vec2;
use minar_engine::scene::DrawList;

/// Fixed-radius draw target for the analog face.
///
/// The surface is fully overwritten every tick (clear, then redraw), so the
/// only cross-tick guarantee is "the visible frame equals the last tick's
/// instant". The center sits at `(radius, radius)`, mirroring a square canvas
/// translated to its middle.
#[derive(Debug, Default)]
pub struct FaceSurface {
    radius: f32,
    list: DrawList,
}

impl FaceSurface {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            list: DrawList::new(),
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.radius, self.radius)
    }

    /// Drops the previous frame. Call once at the start of each tick.
    #[inline]
    pub fn begin_frame(&mut self) {
        self.list.clear();
    }

    /// The current frame's draw stream.
    #[inline]
    pub fn draw_list(&mut self) -> &mut DrawList {
        &mut self.list
    }

    /// Read-only view of the current frame in insertion order.
    #[inline]
    pub fn frame(&self) -> &DrawList {
        &self.list
    }
}
