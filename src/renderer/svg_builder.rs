//! SVG builder — accumulates glyph strokes and produces the final string.

use super::constants::*;
use crate::model::LineSegment;

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    width: i32,
    height: i32,
    title: Option<String>,
}

impl SvgBuilder {
    pub(super) fn new(width: i32, height: i32) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            title: None,
        }
    }

    pub(super) fn title(&mut self, content: &str) {
        self.title = Some(escape_text(content));
    }

    pub(super) fn line(&mut self, segment: &LineSegment) {
        self.elements.push(line_element(segment));
    }

    /// Wrap the accumulated strokes in a titled, backgrounded `<svg>` root.
    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" role="img" aria-labelledby="title">"#,
            self.width, self.height
        );
        svg.push('\n');
        if let Some(title) = &self.title {
            svg.push_str(&format!(r#"  <title id="title">{}</title>"#, title));
            svg.push('\n');
        }
        svg.push_str(&format!(
            r#"  <rect width="{}" height="{}" fill="{}"/>"#,
            self.width, self.height, BACKGROUND_COLOR
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <g stroke="{}" stroke-width="{}" stroke-linecap="{}">"#,
            INK_COLOR, STROKE_WIDTH, STROKE_LINECAP
        ));
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("    ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("  </g>\n");
        svg.push_str("</svg>\n");
        svg
    }
}

/// Serialize one segment as an SVG `<line>` element.
pub(super) fn line_element(segment: &LineSegment) -> String {
    format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
        segment.x1, segment.y1, segment.x2, segment.y2
    )
}

fn escape_text(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
