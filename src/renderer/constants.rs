//! Shared constants for glyph rendering (all in SVG user units).

// ── Canvas ──────────────────────────────────────────────────────────
pub(crate) const CANVAS_WIDTH: i32 = 100;
pub(crate) const STEM_X: i32 = CANVAS_WIDTH / 2; // both systems hang off a centred stem

// ── Stroke ──────────────────────────────────────────────────────────
pub(super) const STROKE_WIDTH: i32 = 5;
pub(super) const STROKE_LINECAP: &str = "round";

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const BACKGROUND_COLOR: &str = "#f5f0e6"; // parchment
pub(super) const INK_COLOR: &str = "#2c1810";
