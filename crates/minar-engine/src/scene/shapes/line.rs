use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// End-cap geometry for stroked lines.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Stroked-line draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub cap: LineCap,
    pub color: Color,
}

impl DrawList {
    /// Records a stroked line.
    #[inline]
    pub fn push_line(
        &mut self,
        z: ZIndex,
        from: Vec2,
        to: Vec2,
        width: f32,
        cap: LineCap,
        color: Color,
    ) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, width, cap, color }));
    }
}
