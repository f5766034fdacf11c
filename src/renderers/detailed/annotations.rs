//! Plan annotations: wall measurements, floor labels, door swings
//!
//! All inputs are already in plan units (scaled, flattened to `y = 0`).

use crate::geometry::alignment::rotate_point_around;
use crate::geometry::polygon::{plan_extent_endpoints, point_in_polygons};
use crate::geometry::units::{feet_inches, format_square_feet};
use crate::geometry::PlanPoint;
use crate::models::{Point3, PointLoop};
use crate::renderers::options::{DetailedOptions, PolylineStyle};
use crate::renderers::svg::elements::{empty_element, fmt_num, render_polyline_with, text_element};

/// Measurement lines sit this many wall widths off the wall
const MEASURE_OFFSET_WALLS: f64 = 3.0;

/// Door leaves are drawn opened by this angle
const DOOR_SWING_DEG: f64 = 30.0;

const LABEL_FONT: &str = "Arial, Helvetica, sans-serif";

/// Length label, dimension line and end dots for one wall
///
/// The dimension line is drawn on the side of the wall whose offset midpoint
/// falls outside the floor; when both sides are inside or both outside, the
/// first side is used. Walls with fewer than two points or zero length get
/// no annotation.
pub fn wall_measurement(wall: &[Point3], floors: &[PointLoop], opts: &DetailedOptions) -> Option<String> {
    let [w0, w1, ..] = wall else {
        return None;
    };
    let (p0, p1) = plan_extent_endpoints(wall)?;
    let length = p0.plan_distance(&p1);
    if length == 0.0 {
        return None;
    }

    let wall_width = opts.wall_width();
    let font_size = wall_width * 2.0;
    let offset = wall_width * MEASURE_OFFSET_WALLS;
    let color = &opts.palette.wall;

    // Unit normal of the extent diagonal
    let ux = -(p0.z - p1.z) / length;
    let uz = (p0.x - p1.x) / length;
    let shift = |p: &Point3, d: f64| Point3::new(p.x + ux * d, 0.0, p.z + uz * d);

    let mid = w0.midpoint(w1);
    let first_side_inside = {
        let m = shift(&mid, offset);
        point_in_polygons(m.x, m.z, floors)
    };
    let second_side_inside = {
        let m = shift(&mid, -offset);
        point_in_polygons(m.x, m.z, floors)
    };
    let side = if first_side_inside && !second_side_inside {
        -offset
    } else {
        offset
    };
    let (a, b) = (shift(&p0, side), shift(&p1, side));

    let label = feet_inches(length / opts.scale_factor * opts.length_correction);
    let text_length = label.chars().count() as f64 * (font_size / 1.5);
    let dash_length = ((length - text_length) / 2.0).max(0.0);

    let line = empty_element(
        "line",
        &[
            ("x1", fmt_num(a.x)),
            ("y1", fmt_num(a.z)),
            ("x2", fmt_num(b.x)),
            ("y2", fmt_num(b.z)),
            ("stroke-dasharray", format!("{} {}", fmt_num(dash_length), fmt_num(text_length))),
            ("stroke", color.clone()),
            ("stroke-width", fmt_num(wall_width / 5.0)),
            ("fill", "none".to_string()),
        ],
    );

    let mid_x = (a.x + b.x) / 2.0;
    let mid_z = (a.z + b.z) / 2.0;
    let angle = (b.z - a.z).atan2(b.x - a.x).to_degrees();
    let text = text_element(
        "text",
        &[
            ("x", fmt_num(mid_x)),
            ("y", fmt_num(mid_z)),
            ("text-anchor", "middle".to_string()),
            ("dominant-baseline", "middle".to_string()),
            ("font-family", "monospace".to_string()),
            ("fill", color.clone()),
            ("font-size", fmt_num(font_size)),
            (
                "transform",
                format!("rotate({}, {}, {})", fmt_num(angle), fmt_num(mid_x), fmt_num(mid_z)),
            ),
        ],
        &label,
    );

    let dot = |p: &Point3| {
        empty_element(
            "circle",
            &[
                ("cx", fmt_num(p.x)),
                ("cy", fmt_num(p.z)),
                ("r", fmt_num(font_size / 4.0)),
                ("fill", color.clone()),
            ],
        )
    };

    Some(format!("{}{}{}{}", line, text, dot(&a), dot(&b)))
}

/// Name and area labels centred on a floor
///
/// The name sits one and a half lines above the area.
pub fn floor_labels(name: &str, area_sq_m: f64, centroid: &PlanPoint, font_size: f64, color: &str) -> String {
    let label = |y: f64, content: &str| {
        text_element(
            "text",
            &[
                ("x", fmt_num(centroid.x)),
                ("y", fmt_num(y)),
                ("fill", color.to_string()),
                ("text-anchor", "middle".to_string()),
                ("dominant-baseline", "middle".to_string()),
                ("font-weight", "bold".to_string()),
                ("font-family", LABEL_FONT.to_string()),
                ("font-size", fmt_num(font_size)),
            ],
            content,
        )
    };

    format!(
        "{}{}",
        label(centroid.z - font_size * 1.5, name),
        label(centroid.z, &format_square_feet(area_sq_m))
    )
}

/// A door or window drawn over its wall
///
/// A floor-coloured stroke as wide as the wall hides the wall behind it, and a
/// dashed stroke marks the feature.
pub fn over_wall(points: &[Point3], color: &str, width: f64, opts: &DetailedOptions) -> Vec<String> {
    let wall_width = opts.wall_width();
    let cover = PolylineStyle::outline(opts.palette.floor_fill.clone(), wall_width);
    let mark = PolylineStyle::outline(color, width);
    let butt = ("stroke-linecap", "butt".to_string());

    [
        render_polyline_with(points, &cover, &[butt.clone()]),
        render_polyline_with(
            points,
            &mark,
            &[
                (
                    "stroke-dasharray",
                    format!("{} {}", fmt_num(wall_width), fmt_num(wall_width / 1.5)),
                ),
                butt,
            ],
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Swing arc and opened leaf of a door hinged at its first point
pub fn door_swing(door: &[Point3], opts: &DetailedOptions) -> Option<String> {
    let [start, end, ..] = door else {
        return None;
    };

    let radius = start.plan_distance(end);
    let opened = rotate_point_around(end, start, DOOR_SWING_DEG);
    let color = &opts.palette.door;

    let arc = empty_element(
        "path",
        &[
            (
                "d",
                format!(
                    "M {} {} A {} {} 0 0 1 {} {}",
                    fmt_num(end.x),
                    fmt_num(end.z),
                    fmt_num(radius),
                    fmt_num(radius),
                    fmt_num(opened.x),
                    fmt_num(opened.z)
                ),
            ),
            ("stroke", color.clone()),
            ("stroke-width", fmt_num(opts.door_width())),
            ("stroke-dasharray", "0.1".to_string()),
            ("fill", "none".to_string()),
        ],
    );

    let leaf = empty_element(
        "line",
        &[
            ("x1", fmt_num(start.x)),
            ("y1", fmt_num(start.z)),
            ("x2", fmt_num(opened.x)),
            ("y2", fmt_num(opened.z)),
            ("stroke", color.clone()),
            ("stroke-width", fmt_num(opts.wall_width())),
            ("stroke-linecap", "square".to_string()),
        ],
    );

    Some(format!("{}{}", arc, leaf))
}
