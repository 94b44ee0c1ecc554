//! Cistercian numerals (0–9999).
//!
//! One digit per quadrant around a vertical stem: units top-right,
//! tens top-left, hundreds bottom-right, thousands bottom-left. Every
//! quadrant draws from the same ten stroke templates; the quadrant only
//! decides where the template's origin sits and which axes are mirrored.

use super::constants::{CANVAS_WIDTH, STEM_X};
use super::decimal_digits;
use crate::model::{Glyph, LineSegment, SystemId};

/// Quadrant cell height (the cell is `CELL_W` wide).
const H: i32 = 45;
const CELL_W: i32 = 30;
/// Vertical gap between the top and bottom quadrant pairs.
const GAP: i32 = 22;
const MARGIN: i32 = 10;

const TOP: i32 = MARGIN;
const BOTTOM: i32 = MARGIN + H * 2 + GAP;

pub(crate) const WIDTH: i32 = CANVAS_WIDTH;
pub(crate) const HEIGHT: i32 = BOTTOM + MARGIN;

type Stroke = [i32; 4];

/// Digit templates in local cell coordinates: `[x1, y1, x2, y2]`.
const TEMPLATES: [&[Stroke]; 10] = [
    &[],                                                            // 0
    &[[0, 0, CELL_W, 0]],                                           // 1: top bar
    &[[0, H, CELL_W, H]],                                           // 2: bottom bar
    &[[0, 0, CELL_W, H]],                                           // 3: falling diagonal
    &[[CELL_W, 0, 0, H]],                                           // 4: rising diagonal
    &[[0, 0, CELL_W, 0], [CELL_W, 0, 0, H]],                        // 5: 1 + 4
    &[[CELL_W, 0, CELL_W, H]],                                      // 6: outer vertical
    &[[0, 0, CELL_W, 0], [CELL_W, 0, CELL_W, H]],                   // 7: 1 + 6
    &[[0, H, CELL_W, H], [CELL_W, H, CELL_W, 0]],                   // 8: 2 + 6
    &[[0, 0, CELL_W, 0], [CELL_W, 0, CELL_W, H], [CELL_W, H, 0, H]], // 9: box open to the stem
];

/// Origin and mirroring of one quadrant.
struct Quadrant {
    origin_x: i32,
    origin_y: i32,
    scale_x: i32,
    scale_y: i32,
}

/// Indexed by digit position: units, tens, hundreds, thousands.
const QUADRANTS: [Quadrant; 4] = [
    Quadrant { origin_x: STEM_X, origin_y: TOP, scale_x: 1, scale_y: 1 },
    Quadrant { origin_x: STEM_X, origin_y: TOP, scale_x: -1, scale_y: 1 },
    Quadrant { origin_x: STEM_X, origin_y: BOTTOM, scale_x: 1, scale_y: -1 },
    Quadrant { origin_x: STEM_X, origin_y: BOTTOM, scale_x: -1, scale_y: -1 },
];

impl Quadrant {
    fn place(&self, &[x1, y1, x2, y2]: &Stroke) -> LineSegment {
        LineSegment::new(
            self.origin_x + x1 * self.scale_x,
            self.origin_y + y1 * self.scale_y,
            self.origin_x + x2 * self.scale_x,
            self.origin_y + y2 * self.scale_y,
        )
    }
}

/// Encode `value` (already checked to be ≤ 9999).
pub(crate) fn encode(value: u32) -> Glyph {
    let segments = decimal_digits::<4>(value)
        .iter()
        .zip(QUADRANTS.iter())
        .flat_map(|(&digit, quadrant)| {
            TEMPLATES[digit].iter().map(move |stroke| quadrant.place(stroke))
        })
        .collect();

    Glyph {
        system: SystemId::Cistercian,
        value,
        stem: LineSegment::new(STEM_X, TOP, STEM_X, BOTTOM),
        segments,
    }
}
