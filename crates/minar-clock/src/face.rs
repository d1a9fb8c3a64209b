//! Analog face painting.

use std::f32::consts::PI;

use minar_engine::coords::Vec2;
use minar_engine::paint::Color;
use minar_engine::scene::shapes::LineCap;
use minar_engine::scene::{DrawList, ZIndex};

use crate::angles::HandAngles;

// Paint layers, back to front.
const Z_FACE: ZIndex = ZIndex::new(0);
const Z_NUMERALS: ZIndex = ZIndex::new(1);
const Z_HANDS: ZIndex = ZIndex::new(2);
const Z_PIN: ZIndex = ZIndex::new(3);

/// Colors and proportions of the analog face.
///
/// Lengths and widths are fractions of the face radius, so one style scales
/// to any surface size.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceStyle {
    pub face_color: Color,
    pub numeral_color: Color,
    pub hour_color: Color,
    pub minute_color: Color,
    pub second_color: Color,
    pub pin_color: Color,

    /// Numeral ring placement, fraction of radius.
    pub numeral_ring: f32,
    /// Numeral glyph size, fraction of radius.
    pub numeral_size: f32,
    pub hour_len: f32,
    pub minute_len: f32,
    pub second_len: f32,
    /// Hour and minute stroke width, fraction of radius.
    pub hand_width: f32,
    pub second_width: f32,
    /// Center-dot radius, fraction of radius.
    pub pin_radius: f32,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            face_color: Color::from_straight(0.0, 0.0, 0.0, 0.1),
            numeral_color: Color::WHITE,
            hour_color: Color::WHITE,
            minute_color: Color::WHITE,
            second_color: Color::from_srgb_u8(255, 0, 0, 255),
            pin_color: Color::WHITE,

            numeral_ring: 0.85,
            numeral_size: 0.15,
            hour_len: 0.5,
            minute_len: 0.8,
            second_len: 0.9,
            hand_width: 0.07,
            second_width: 0.02,
            pin_radius: 0.1,
        }
    }
}

/// Paints one full face frame into `list`: disc, twelve numerals, three
/// hands, center pin.
///
/// The caller owns the clear-then-redraw cycle; this function only appends.
pub fn paint_face(
    list: &mut DrawList,
    center: Vec2,
    radius: f32,
    angles: HandAngles,
    style: &FaceStyle,
) {
    list.push_circle(Z_FACE, center, radius, style.face_color);

    // Numeral `num` sits at num·π/6 from 12 o'clock. The placement rotates a
    // straight-up translation vector; the glyph itself stays upright because
    // only the anchor point moves.
    for num in 1..=12u32 {
        let angle = num as f32 * PI / 6.0;
        let pos = center + Vec2::polar(angle, radius * style.numeral_ring);
        list.push_text(
            Z_NUMERALS,
            num.to_string(),
            radius * style.numeral_size,
            style.numeral_color,
            pos,
        );
    }

    let hands = [
        (angles.hour as f32, style.hour_len, style.hand_width, style.hour_color),
        (angles.minute as f32, style.minute_len, style.hand_width, style.minute_color),
        (angles.second as f32, style.second_len, style.second_width, style.second_color),
    ];
    for (angle, len, width, color) in hands {
        let tip = center + Vec2::polar(angle, radius * len);
        list.push_line(Z_HANDS, center, tip, radius * width, LineCap::Round, color);
    }

    list.push_circle(Z_PIN, center, radius * style.pin_radius, style.pin_color);
}
