//! Basingstoke centesimal numerals (0–99), after Matthew Paris (c. 1242).
//!
//! Units hang on the LEFT of the stem and tens on the RIGHT, the opposite
//! of the Cistercian convention. A digit `d` picks one of three attachment
//! zones on the stem and one of three hook shapes:
//! `(zone, shape) = divmod(d - 1, 3)`.

use super::constants::{CANVAS_WIDTH, STEM_X};
use super::decimal_digits;
use crate::model::{Glyph, LineSegment, SystemId};

const HOOK_LEN: i32 = 16;
const PAD: i32 = 2;
/// Room above and below the stem for hooks that leave the top/bottom zone.
const HOOK_PAD: i32 = 20;
const STEM_LEN: i32 = 76;
const STEM_TOP: i32 = PAD + HOOK_PAD;

pub(crate) const WIDTH: i32 = CANVAS_WIDTH;
pub(crate) const HEIGHT: i32 = PAD + HOOK_PAD + STEM_LEN + HOOK_PAD + PAD;

/// Hook templates drawn outward from the attachment point: `[x1, y1, x2, y2]`.
const SHAPES: [[i32; 4]; 3] = [
    [0, 0, HOOK_LEN, -HOOK_LEN], // oblique
    [0, 0, HOOK_LEN, 0],         // right angle
    [0, 0, HOOK_LEN, HOOK_LEN],  // acute
];

/// Horizontal mirroring per digit position: units left, tens right.
const SIDES: [i32; 2] = [-1, 1];

/// Stem extent after insetting for hooks that would leave the canvas.
struct Stem {
    top: i32,
    len: i32,
}

impl Stem {
    /// A `1` (oblique hook at the top zone) climbs above the stem and a
    /// `9` (acute hook at the bottom zone) drops below it; shorten the stem
    /// by a hook length on that end so the strokes stay inside the canvas.
    fn for_digits(digits: &[usize]) -> Self {
        let top_inset = if digits.contains(&1) { HOOK_LEN } else { 0 };
        let bottom_inset = if digits.contains(&9) { HOOK_LEN } else { 0 };
        Self {
            top: STEM_TOP + top_inset,
            len: STEM_LEN - top_inset - bottom_inset,
        }
    }

    fn zone_y(&self, zone: usize) -> i32 {
        match zone {
            0 => self.top,
            1 => self.top + self.len / 2,
            _ => self.top + self.len,
        }
    }

    fn segment(&self) -> LineSegment {
        LineSegment::new(STEM_X, self.top, STEM_X, self.top + self.len)
    }
}

fn hook(digit: usize, side: i32, stem: &Stem) -> Option<LineSegment> {
    if digit == 0 {
        return None;
    }
    let (zone, shape) = ((digit - 1) / 3, (digit - 1) % 3);
    let y = stem.zone_y(zone);
    let [x1, y1, x2, y2] = SHAPES[shape];
    Some(LineSegment::new(
        STEM_X + x1 * side,
        y + y1,
        STEM_X + x2 * side,
        y + y2,
    ))
}

/// Encode `value` (already checked to be ≤ 99).
pub(crate) fn encode(value: u32) -> Glyph {
    let digits = decimal_digits::<2>(value);
    let stem = Stem::for_digits(&digits);

    let segments = digits
        .iter()
        .zip(SIDES)
        .filter_map(|(&digit, side)| hook(digit, side, &stem))
        .collect();

    Glyph {
        system: SystemId::Basingstoke,
        value,
        stem: stem.segment(),
        segments,
    }
}
