//! SVG element serialization
//!
//! Elements are written as strings with attributes in a fixed order. Plan
//! coordinates are written unrounded.

use crate::models::Point3;
use crate::renderers::options::PolylineStyle;

/// Format a number for an attribute; negative zero prints as `0`
pub fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

pub(crate) fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn write_attributes(out: &mut String, attributes: &[(&str, String)]) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&xml_escape(value));
        out.push('"');
    }
}

/// Self-closing element, e.g. `<line x1="0" ... />`
pub fn empty_element(name: &str, attributes: &[(&str, String)]) -> String {
    let mut out = format!("<{}", name);
    write_attributes(&mut out, attributes);
    out.push_str(" />");
    out
}

/// Element with escaped text content, e.g. `<text ...>Kitchen</text>`
pub fn text_element(name: &str, attributes: &[(&str, String)], text: &str) -> String {
    let mut out = format!("<{}", name);
    write_attributes(&mut out, attributes);
    out.push('>');
    out.push_str(&xml_escape(text));
    out.push_str(&format!("</{}>", name));
    out
}

/// `points` attribute value: space-separated `x,z` pairs
pub fn polyline_points(points: &[Point3]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.z)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serialize one loop as a `<polyline>`; empty loops produce nothing
pub fn render_polyline(points: &[Point3], style: &PolylineStyle) -> Option<String> {
    render_polyline_with(points, style, &[])
}

/// `render_polyline` with extra attributes appended after `fill`
pub fn render_polyline_with(
    points: &[Point3],
    style: &PolylineStyle,
    extra: &[(&str, String)],
) -> Option<String> {
    if points.is_empty() {
        return None;
    }

    let mut attributes = vec![
        ("points", polyline_points(points)),
        ("stroke", style.stroke.clone()),
        ("stroke-width", fmt_num(style.stroke_width)),
        ("fill", style.fill.clone()),
    ];
    attributes.extend(extra.iter().cloned());

    Some(empty_element("polyline", &attributes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_polyline() {
        let points = [Point3::new(0.0, 5.0, 0.0), Point3::new(1.5, 5.0, -2.0)];
        let svg = render_polyline(&points, &PolylineStyle::outline("black", 0.1)).unwrap();
        assert_eq!(
            svg,
            r#"<polyline points="0,0 1.5,-2" stroke="black" stroke-width="0.1" fill="none" />"#
        );
    }

    #[test]
    fn test_render_polyline_skips_empty_loop() {
        assert!(render_polyline(&[], &PolylineStyle::outline("black", 0.1)).is_none());
    }

    #[test]
    fn test_negative_zero_prints_plain() {
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(-0.25), "-0.25");
        assert_eq!(fmt_num(13.0), "13");
    }

    #[test]
    fn test_text_is_escaped() {
        let el = text_element("text", &[("x", "1".to_string())], "Bed & <Bath>");
        assert_eq!(el, r#"<text x="1">Bed &amp; &lt;Bath&gt;</text>"#);
    }

    #[test]
    fn test_extra_attributes_follow_fill() {
        let svg = render_polyline_with(
            &[Point3::default()],
            &PolylineStyle::outline("#111", 2.0),
            &[("stroke-linecap", "butt".to_string())],
        )
        .unwrap();
        assert!(svg.ends_with(r#"fill="none" stroke-linecap="butt" />"#));
    }
}
