use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Text draw payload.
///
/// Text is anchored at its center on both axes (the canvas
/// `textAlign = center` / `textBaseline = middle` convention), which is what
/// keeps glyphs placed on a ring visually balanced regardless of their width.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Glyph size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Center of the text block in logical pixels.
    pub center: Vec2,
}

impl DrawList {
    /// Records a centered text draw command.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        size: f32,
        color: Color,
        center: Vec2,
    ) {
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            size,
            color,
            center,
        }));
    }
}
