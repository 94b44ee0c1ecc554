//! Rendering tests — render numerals to SVG and check the markup.

use numeralib::{
    chunk_digits, encode_glyph, render_glyph_svg, render_text_to_svgs, NumeralError, SystemId,
};
use pretty_assertions::assert_eq;

const C: SystemId = SystemId::Cistercian;
const B: SystemId = SystemId::Basingstoke;

/// Parse the SVG and return the number of `<svg>` elements in it.
fn svg_root_count(svg: &str) -> usize {
    let doc = roxmltree::Document::parse(svg).expect("SVG should be well-formed XML");
    assert_eq!(doc.root_element().tag_name().name(), "svg");
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "svg")
        .count()
}

#[test]
fn boundary_values_render() {
    for (system, value) in [(C, 0), (C, 9999), (B, 0), (B, 99)] {
        let svg = render_glyph_svg(system, value)
            .unwrap_or_else(|e| panic!("{system} {value} should render: {e}"));
        assert!(svg.starts_with("<svg"), "Output should be SVG");
        assert!(svg.contains("</svg>"), "SVG should be closed");
        assert_eq!(svg_root_count(&svg), 1);
    }
}

#[test]
fn out_of_range_values_fail() {
    assert_eq!(
        render_glyph_svg(C, 10000),
        Err(NumeralError::OutOfRange { system: C, value: 10000, max: 9999 })
    );
    assert_eq!(
        render_glyph_svg(B, 100),
        Err(NumeralError::OutOfRange { system: B, value: 100, max: 99 })
    );
    assert!(matches!(render_glyph_svg(C, -1), Err(NumeralError::OutOfRange { .. })));
    assert!(matches!(render_glyph_svg(B, -42), Err(NumeralError::OutOfRange { .. })));
    assert!(encode_glyph(C, i64::MIN).is_err());
}

#[test]
fn rendering_is_deterministic() {
    for system in SystemId::ALL {
        let a = render_glyph_svg(system, 42).unwrap();
        let b = render_glyph_svg(system, 42).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn svg_structure() {
    let svg = render_glyph_svg(C, 1234).unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let root = doc.root_element();
    assert_eq!(root.attribute("viewBox"), Some("0 0 100 132"));

    let title = root
        .descendants()
        .find(|n| n.has_tag_name("title"))
        .and_then(|n| n.text());
    assert_eq!(title, Some("Cistercian numeral for 1234"));

    let rect = root.descendants().find(|n| n.has_tag_name("rect")).unwrap();
    assert_eq!(rect.attribute("fill"), Some("#f5f0e6"));

    let group = root.descendants().find(|n| n.has_tag_name("g")).unwrap();
    assert_eq!(group.attribute("stroke-linecap"), Some("round"));
    assert_eq!(group.attribute("stroke-width"), Some("5"));

    // stem + one stroke per digit
    let lines = group.children().filter(|n| n.has_tag_name("line")).count();
    assert_eq!(lines, 5);
}

#[test]
fn zero_glyph_is_stem_only() {
    for system in SystemId::ALL {
        let svg = render_glyph_svg(system, 0).unwrap();
        assert_eq!(svg.matches("<line").count(), 1);
    }
}

#[test]
fn one_svg_per_chunk() {
    let inputs = ["1 2 3", "000001000003222", "12345678", "abc", "", "phone: 0800 555 0199"];
    for system in SystemId::ALL {
        for input in inputs {
            let rendered = render_text_to_svgs(input, system);
            assert_eq!(rendered.len(), chunk_digits(input, system).len(), "{input:?}");
            for numeral in &rendered {
                assert_eq!(svg_root_count(&numeral.svg), 1);
            }
        }
    }
}

#[test]
fn rendered_numerals_keep_chunk_order() {
    let rendered = render_text_to_svgs("123405678", C);
    let values: Vec<u32> = rendered.iter().map(|n| n.chunk.value).collect();
    assert_eq!(values, vec![1234, 0, 5678]);
    assert!(rendered[1].chunk.is_zero_separator());
    assert!(rendered[2].svg.contains("Cistercian numeral for 5678"));
}

#[test]
fn tagged_entry_points() {
    assert!(numeralib::render_tagged_glyph_svg("basingstoke", 7).is_ok());
    assert_eq!(
        numeralib::render_tagged_glyph_svg("roman", 7),
        Err(NumeralError::UnknownSystem("roman".into()))
    );
    let json = numeralib::chunk_tagged_text_json("12345", "basingstoke").unwrap();
    let values: Vec<u32> = serde_json::from_str::<Vec<serde_json::Value>>(&json)
        .unwrap()
        .iter()
        .map(|c| c["value"].as_u64().unwrap() as u32)
        .collect();
    assert_eq!(values, vec![12, 34, 5]);
}
