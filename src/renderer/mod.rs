//! Glyph renderer — encodes numeral values as strokes and wraps them in SVG.
//!
//! Each numeral system has its own encoder module producing a [`Glyph`];
//! the SVG wrapper is shared and depends only on the system's canvas size
//! and title.

mod constants;
mod svg_builder;
pub(crate) mod basingstoke;
pub(crate) mod cistercian;

use crate::chunker::chunk_text;
use crate::error::NumeralResult;
use crate::model::*;
use svg_builder::SvgBuilder;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Encode `value` as a glyph of `system`, rejecting out-of-range values.
pub fn encode_glyph(system: SystemId, value: i64) -> NumeralResult<Glyph> {
    system.system().glyph(value)
}

/// Render a single numeral to a complete SVG string.
///
/// Fails with [`NumeralError::OutOfRange`](crate::NumeralError::OutOfRange)
/// for values outside 0–9999 (Cistercian) or 0–99 (Basingstoke).
pub fn render_glyph_svg(system: SystemId, value: i64) -> NumeralResult<String> {
    let glyph = encode_glyph(system, value)?;
    Ok(render_glyph(&glyph))
}

/// Wrap an encoded glyph into an SVG image. Identical glyphs always
/// produce byte-identical output.
pub fn render_glyph(glyph: &Glyph) -> String {
    let system = glyph.system.system();
    let mut svg = SvgBuilder::new(system.canvas_width, system.canvas_height);
    svg.title(&format!("{} for {}", system.title_label, glyph.value));
    for segment in glyph.lines() {
        svg.line(segment);
    }
    svg.build()
}

/// Chunk `text` and render one SVG per chunk.
///
/// A numeral that fails to render is logged and skipped without affecting
/// its neighbours.
pub fn render_text_to_svgs(text: &str, system: SystemId) -> Vec<RenderedNumeral> {
    let chunks = chunk_text(text, system);
    let rendered: Vec<RenderedNumeral> = chunks
        .into_iter()
        .filter_map(|chunk| match render_glyph_svg(system, i64::from(chunk.value)) {
            Ok(svg) => Some(RenderedNumeral { chunk, svg }),
            Err(e) => {
                tracing::warn!(error = %e, start = chunk.start, "skipping numeral");
                None
            }
        })
        .collect();
    tracing::debug!(system = %system, numerals = rendered.len(), "rendered numerals");
    rendered
}

/// Least-significant-first decimal digits of `value`, zero-padded to `N`.
pub(super) fn decimal_digits<const N: usize>(value: u32) -> [usize; N] {
    let mut digits = [0; N];
    let mut rest = value;
    for digit in digits.iter_mut() {
        *digit = (rest % 10) as usize;
        rest /= 10;
    }
    digits
}
