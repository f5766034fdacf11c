//! Detailed floor plan
//!
//! Renders a whole multi-room scan as an annotated plan for reports: floors
//! labelled with their name and area, walls with length measurements, doors
//! with swing arcs, windows and furniture. Geometry is scaled to plan units
//! (`scale_factor` per meter) so stroke widths and fonts stay legible.

pub mod annotations;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{validate_coordinates, validate_room_with};
use crate::errors::PlanResult;
use crate::geometry::polygon::polygon_properties;
use crate::geometry::squaring::{align_doors_to_walls, dominant_wall, square_walls};
use crate::geometry::units::square_feet;
use crate::geometry::{
    align_room_by, align_room_with_angle, compute_view_box_with_padding, select_reference_wall,
    PlanPoint, RectSize, ReferenceWall, ViewBox,
};
use crate::models::{Point3, PointLoop, Room, ScanResult};
use crate::renderers::options::{DetailedOptions, PolylineStyle};
use crate::renderers::svg::{SvgDocument, EMPTY_SVG};

use annotations::{door_swing, floor_labels, over_wall, wall_measurement};

/// Label shown on the merged room's floors
pub const TOTAL_LABEL: &str = "Total";

/// Per-floor measurements, in meters
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FloorSummary {
    pub name: String,
    pub area_sq_m: f64,
    pub area_sq_ft: f64,
    pub centroid: Option<PlanPoint>,
    pub bounding_rect: Option<RectSize>,
}

/// Output of the detailed renderer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailedPlan {
    pub svg: String,
    /// Total area of the merged room's floors, in square meters
    pub area: f64,
    /// View box in plan units; `None` when the scan has no geometry
    pub bounds: Option<ViewBox>,
    pub floors: Vec<FloorSummary>,
}

impl DetailedPlan {
    fn empty() -> Self {
        Self {
            svg: EMPTY_SVG.to_string(),
            area: 0.0,
            bounds: None,
            floors: Vec::new(),
        }
    }
}

/// Renderer for annotated multi-room plans
#[derive(Clone, Debug, Default)]
pub struct DetailedPlanRenderer {
    options: DetailedOptions,
}

impl DetailedPlanRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DetailedOptions) -> Self {
        Self { options }
    }

    /// Render `scan`, naming sub-rooms from `room_names`
    ///
    /// `room_names` runs parallel to `scan.original_rooms`.
    pub fn render(&self, scan: &ScanResult, room_names: &[String]) -> PlanResult<DetailedPlan> {
        let opts = &self.options;

        validate_room_with(&scan.entire_room, opts.reference_wall)?;
        for sub_room in &scan.rooms {
            validate_coordinates(sub_room)?;
        }

        let names = scan.sub_room_names(room_names);
        let aligned = align_room_by(&scan.entire_room, opts.reference_wall)?;
        let mut room = aligned.room;
        let sub_rooms: Vec<Room> = scan
            .rooms
            .iter()
            .map(|sub_room| align_room_with_angle(sub_room, aligned.angle))
            .collect();

        if opts.square_walls {
            let longest = select_reference_wall(&room, ReferenceWall::Longest).unwrap_or(0);
            let reference = dominant_wall(&room.walls, longest);
            let squared = square_walls(&mut room.walls, reference);
            log::debug!("Squared {} wall(s) against wall {}", squared, reference);
        }
        if opts.align_doors {
            let aligned_doors = align_doors_to_walls(&mut room.doors, &room.walls);
            log::debug!("Aligned {} door(s) to their walls", aligned_doors);
        }

        let scale = opts.scale_factor;
        let to_plan = |p: &Point3| Point3::new(p.x * scale, 0.0, p.z * scale);
        let room = room.map_points(to_plan);
        let sub_rooms: Vec<Room> = sub_rooms.iter().map(|r| r.map_points(to_plan)).collect();

        let Some(view_box) = compute_view_box_with_padding(room.plan_points(), opts.padding_ratio) else {
            log::debug!("Scan has no plan points, emitting empty SVG");
            return Ok(DetailedPlan::empty());
        };

        let mut doc = SvgDocument::new(view_box).with_xmlns(true);
        let mut labels = String::new();
        let mut floors = Vec::new();
        let mut total_area = 0.0;

        let main_style = PolylineStyle::new(
            opts.palette.floor.clone(),
            opts.floor_width(),
            opts.palette.floor_fill.clone(),
        );
        for floor in room.floors.iter().filter(|f| !f.is_empty()) {
            let summary = self.draw_floor(&mut doc, &mut labels, floor, TOTAL_LABEL, &main_style, 0.22);
            total_area += summary.area_sq_m;
            floors.push(summary);
        }

        // A single sub-room is the merged room itself
        if sub_rooms.len() > 1 {
            let sub_style = PolylineStyle::new(
                opts.palette.sub_floor.clone(),
                opts.sub_floor_width(),
                opts.palette.sub_floor_fill.clone(),
            );
            for (sub_room, name) in sub_rooms.iter().zip(&names) {
                for floor in sub_room.floors.iter().filter(|f| !f.is_empty()) {
                    let summary = self.draw_floor(&mut doc, &mut labels, floor, name, &sub_style, 0.18);
                    floors.push(summary);
                }
            }
        }

        let square = [("stroke-linecap", "square".to_string())];
        let object_style = PolylineStyle::new(
            opts.palette.object.clone(),
            opts.object_width(),
            opts.palette.object_fill.clone(),
        );
        doc.push_polylines_with(&room.objects, &object_style, &square);

        let wall_style = PolylineStyle::outline(opts.palette.wall.clone(), opts.wall_width());
        let mut measurements = String::new();
        for wall in room.walls.iter().filter(|w| !w.is_empty()) {
            doc.push_polylines_with(std::slice::from_ref(wall), &wall_style, &square);
            if let Some(measurement) = wall_measurement(wall, &room.floors, opts) {
                measurements.push_str(&measurement);
            }
        }

        for door in room.doors.iter().filter(|d| !d.is_empty()) {
            for part in over_wall(door, &opts.palette.door, opts.door_width(), opts) {
                doc.push(&part);
            }
            if let Some(swing) = door_swing(door, opts) {
                doc.push(&swing);
            }
        }

        for window in room.windows.iter().filter(|w| !w.is_empty()) {
            for part in over_wall(window, &opts.palette.window, opts.window_width(), opts) {
                doc.push(&part);
            }
        }

        if !labels.is_empty() {
            doc.push(&labels);
        }
        if !measurements.is_empty() {
            doc.push(&measurements);
        }

        log::info!(
            "Detailed plan rendered: {} floor(s), {:.2} m² total",
            floors.len(),
            total_area
        );

        Ok(DetailedPlan {
            svg: doc.finish(),
            area: total_area,
            bounds: Some(view_box),
            floors,
        })
    }

    /// Draw one floor outline and queue its labels; returns its summary in meters
    fn draw_floor(
        &self,
        doc: &mut SvgDocument,
        labels: &mut String,
        floor: &PointLoop,
        name: &str,
        style: &PolylineStyle,
        font_scale: f64,
    ) -> FloorSummary {
        let opts = &self.options;
        let scale = opts.scale_factor;

        doc.push_polylines_with(
            std::slice::from_ref(floor),
            style,
            &[("stroke-linecap", "square".to_string())],
        );

        let props = polygon_properties(floor);
        let area_sq_m = props.area / (scale * scale);
        if let Some(centroid) = &props.centroid {
            labels.push_str(&floor_labels(
                name,
                area_sq_m,
                centroid,
                font_scale * scale,
                &opts.palette.label,
            ));
        }

        FloorSummary {
            name: name.to_string(),
            area_sq_m,
            area_sq_ft: square_feet(area_sq_m),
            centroid: props.centroid.map(|c| PlanPoint {
                x: c.x / scale,
                z: c.z / scale,
            }),
            bounding_rect: props.bounding_rect.map(|r| RectSize {
                width: r.width / scale,
                height: r.height / scale,
            }),
        }
    }
}

/// Render `scan` with default detailed options
pub fn render_detailed(scan: &ScanResult, room_names: &[String]) -> PlanResult<DetailedPlan> {
    DetailedPlanRenderer::new().render(scan, room_names)
}

/// Render `scan` with caller-supplied detailed options
pub fn render_detailed_with_options(
    scan: &ScanResult,
    room_names: &[String],
    options: &DetailedOptions,
) -> PlanResult<DetailedPlan> {
    DetailedPlanRenderer::with_options(options.clone()).render(scan, room_names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PlanError;

    fn p(x: f64, z: f64) -> Point3 {
        Point3::new(x, 0.0, z)
    }

    fn rectangle_room(w: f64, h: f64) -> Room {
        Room {
            walls: vec![
                vec![p(0.0, 0.0), p(w, 0.0)],
                vec![p(w, 0.0), p(w, h)],
                vec![p(w, h), p(0.0, h)],
                vec![p(0.0, h), p(0.0, 0.0)],
            ],
            floors: vec![vec![p(0.0, 0.0), p(w, 0.0), p(w, h), p(0.0, h)]],
            ..Room::default()
        }
    }

    #[test]
    fn test_empty_scan() {
        let plan = render_detailed(&ScanResult::default(), &[]).unwrap();
        assert_eq!(plan, DetailedPlan::empty());
    }

    #[test]
    fn test_scan_of_empty_loops_renders_empty() {
        let scan = ScanResult {
            entire_room: Room {
                walls: vec![vec![]],
                floors: vec![vec![]],
                ..Room::default()
            },
            ..ScanResult::default()
        };
        assert_eq!(render_detailed(&scan, &[]).unwrap(), DetailedPlan::empty());
    }

    #[test]
    fn test_total_area_in_square_meters() {
        let scan = ScanResult {
            entire_room: rectangle_room(4.0, 3.0),
            ..ScanResult::default()
        };
        let plan = render_detailed(&scan, &[]).unwrap();

        assert!((plan.area - 12.0).abs() < 1e-9);
        assert_eq!(plan.floors.len(), 1);
        assert_eq!(plan.floors[0].name, TOTAL_LABEL);
        let rect = plan.floors[0].bounding_rect.unwrap();
        assert!((rect.width * rect.height - 12.0).abs() < 1e-6);
        assert!(plan.svg.contains("129.2 sq ft"));
    }

    #[test]
    fn test_single_sub_room_is_not_drawn_separately() {
        let scan = ScanResult {
            entire_room: rectangle_room(4.0, 3.0),
            rooms: vec![rectangle_room(4.0, 3.0)],
            original_rooms: vec![rectangle_room(4.0, 3.0)],
        };
        let plan = render_detailed(&scan, &["Kitchen".to_string()]).unwrap();
        assert_eq!(plan.floors.len(), 1);
        assert!(!plan.svg.contains("Kitchen"));
    }

    #[test]
    fn test_rejects_non_finite_sub_room() {
        let mut broken = rectangle_room(1.0, 1.0);
        broken.floors[0][0].x = f64::NAN;
        let scan = ScanResult {
            entire_room: rectangle_room(4.0, 3.0),
            rooms: vec![broken],
            ..ScanResult::default()
        };
        assert!(matches!(
            render_detailed(&scan, &[]),
            Err(PlanError::InvalidCoordinate { .. })
        ));
    }
}
