//! Character-grid rasterizer for the analog face.
//!
//! Dispatches over the scene's draw commands the way a real renderer would,
//! just into a `Vec<char>` grid instead of a GPU surface. Cells are sampled
//! at half-pixel steps horizontally because terminal cells are roughly twice
//! as tall as they are wide.

use minar_clock::surface::FaceSurface;
use minar_engine::coords::Vec2;
use minar_engine::paint::Color;
use minar_engine::scene::DrawCmd;

/// Renders the surface's current frame to a printable string, one terminal
/// row per line, commands applied back-to-front.
pub fn rasterize(surface: &mut FaceSurface) -> String {
    let radius = surface.radius();
    let rows = (radius * 2.0).round() as usize + 1;
    let cols = rows * 2;
    let mut grid = Grid::new(rows, cols);

    for item in surface.draw_list().iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Circle(c) => grid.fill_circle(c.center, c.radius, glyph(c.color)),
            DrawCmd::Line(l) => grid.stroke_line(l.from, l.to, glyph(l.color)),
            DrawCmd::Text(t) => grid.place_text(&t.text, t.center),
        }
    }

    grid.into_string()
}

/// Shade character for a solid fill.
fn glyph(color: Color) -> char {
    let (r, g, _b, a) = color.to_straight();
    if a < 0.5 {
        '.'
    } else if r > 0.66 && g < 0.33 {
        '*'
    } else {
        '#'
    }
}

struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![' '; rows * cols],
        }
    }

    fn set_cell(&mut self, row: f32, col: f32, ch: char) {
        if row < 0.0 || col < 0.0 {
            return;
        }
        let (row, col) = (row as usize, col as usize);
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = ch;
        }
    }

    /// Logical point → cell, x stretched to the 2:1 terminal aspect.
    fn plot(&mut self, p: Vec2, ch: char) {
        self.set_cell(p.y.round(), (p.x * 2.0).round(), ch);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, ch: char) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let p = Vec2::new(col as f32 * 0.5, row as f32);
                if p.distance(center) <= radius {
                    self.cells[row * self.cols + col] = ch;
                }
            }
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, ch: char) {
        let steps = (from.distance(to) * 4.0).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = from + (to - from) * t;
            self.plot(p, ch);
        }
    }

    /// Glyphs land in adjacent cells, centered on the anchor (the scene's
    /// centered-text contract).
    fn place_text(&mut self, text: &str, center: Vec2) {
        let row = center.y.round();
        let len = text.chars().count() as f32;
        let start = (center.x * 2.0).round() - (len - 1.0) / 2.0;
        for (i, ch) in text.chars().enumerate() {
            self.set_cell(row, (start + i as f32).round(), ch);
        }
    }

    fn into_string(self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in 0..self.rows {
            let line: String = self.cells[row * self.cols..(row + 1) * self.cols]
                .iter()
                .collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minar_clock::angles::HandAngles;
    use minar_clock::face::{FaceStyle, paint_face};
    use minar_engine::time::WallTime;

    fn rendered(t: WallTime) -> String {
        let mut surface = FaceSurface::new(10.0);
        let (center, radius) = (surface.center(), surface.radius());
        surface.begin_frame();
        paint_face(
            surface.draw_list(),
            center,
            radius,
            HandAngles::at(t),
            &FaceStyle::default(),
        );
        rasterize(&mut surface)
    }

    #[test]
    fn frame_has_one_row_per_diameter_step() {
        let frame = rendered(WallTime::new(2000, 1, 1, 12, 0, 0));
        assert_eq!(frame.lines().count(), 21);
    }

    #[test]
    fn face_disc_and_hands_are_visible() {
        let frame = rendered(WallTime::new(2000, 1, 1, 12, 0, 0));
        assert!(frame.contains('.'), "face disc missing");
        assert!(frame.contains('#'), "pin missing");
        assert!(frame.contains('*'), "second hand missing");
        // Side numerals sit clear of the upward-pointing hands at noon.
        assert!(frame.contains('3'), "numerals missing");
        assert!(frame.contains('9'), "numerals missing");
    }

    #[test]
    fn corners_outside_the_disc_stay_blank() {
        let frame = rendered(WallTime::new(2000, 1, 1, 12, 0, 0));
        let first = frame.lines().next().unwrap();
        assert!(first.starts_with(' ') || first.is_empty());
    }
}
