//! Floor-plan operations for the WASM API
//!
//! This module exposes the renderer to JavaScript:
//! - Plain floor plan: aligned room outlines as SVG markup
//! - Detailed plan: annotated multi-room plan with areas and measurements
//! - Alignment, view box and diagnostics for previews and debugging

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, deserialize_or_default, plan_error, serialize};
use crate::diagnostics::inspect_room_with;
use crate::geometry::align_room_by;
use crate::models::{Room, ScanResult};
use crate::renderers::{
    render_detailed_with_options, render_with_options, DetailedOptions, RenderOptions, SvgPlanRenderer,
};
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

// ============================================================================
// Floor Plan
// ============================================================================

/// Render a room as an SVG floor plan
///
/// # Arguments
/// * `room` - `{ walls, floors, doors, windows, openings }`, each a list of
///   point loops with points as `[x, y, z]`
/// * `options` - optional `RenderOptions` object (`undefined` for defaults)
///
/// # Returns
/// SVG markup; `<svg></svg>` for a room without points
#[wasm_bindgen(js_name = renderFloorPlan)]
pub fn render_floor_plan(room: JsValue, options: JsValue) -> Result<String, JsValue> {
    wasm_info!("renderFloorPlan called");
    let started = js_sys::Date::now();

    let room: Room = deserialize(room, "Invalid room")?;
    let options: RenderOptions = deserialize_or_default(options, "Invalid render options")?;
    wasm_log!(
        "  Room has {} walls, {} points",
        room.walls.len(),
        room.point_count()
    );

    let svg = render_with_options(&room, &options).map_err(|e| plan_error("renderFloorPlan", e))?;

    wasm_info!(
        "renderFloorPlan completed: {} bytes in {:.1} ms",
        svg.len(),
        js_sys::Date::now() - started
    );
    Ok(svg)
}

/// Render a room given as a JSON string (the capture pipeline's file format)
#[wasm_bindgen(js_name = renderFloorPlanJson)]
pub fn render_floor_plan_json(json: &str) -> Result<String, JsValue> {
    wasm_info!("renderFloorPlanJson called ({} bytes)", json.len());

    let room: Room = serde_json::from_str(json).map_err(|e| plan_error("renderFloorPlanJson", e.into()))?;
    crate::renderers::render(&room).map_err(|e| plan_error("renderFloorPlanJson", e))
}

// ============================================================================
// Alignment and Bounds
// ============================================================================

/// Align a room on its reference wall
///
/// # Returns
/// `{ room, angle }` with the rotated room and the angle in radians
#[wasm_bindgen(js_name = alignRoom)]
pub fn align_room(room: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let room: Room = deserialize(room, "Invalid room")?;
    let options: RenderOptions = deserialize_or_default(options, "Invalid render options")?;

    let aligned = align_room_by(&room, options.reference_wall).map_err(|e| plan_error("alignRoom", e))?;
    wasm_log!("alignRoom: rotated by {:.6} rad", aligned.angle);

    serialize(&aligned, "Failed to serialize aligned room")
}

/// View box the floor plan of `room` would use
///
/// # Returns
/// `{ x, y, width, height }`, or `undefined` for a room without points.
/// Rooms `renderFloorPlan` rejects are rejected here too.
#[wasm_bindgen(js_name = computeViewBox)]
pub fn compute_view_box(room: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let room: Room = deserialize(room, "Invalid room")?;
    let options: RenderOptions = deserialize_or_default(options, "Invalid render options")?;

    let view_box = SvgPlanRenderer::with_options(options)
        .view_box(&room)
        .map_err(|e| plan_error("computeViewBox", e))?;

    serialize(&view_box, "Failed to serialize view box")
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Inspect a room for geometry problems
///
/// # Returns
/// `{ marks: [{ collection, loopIndex, pointIndex, severity, kind, message }] }`
#[wasm_bindgen(js_name = inspectRoom)]
pub fn inspect_room(room: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let room: Room = deserialize(room, "Invalid room")?;
    let options: RenderOptions = deserialize_or_default(options, "Invalid render options")?;

    let diags = inspect_room_with(&room, options.reference_wall);
    if diags.has_errors() {
        wasm_warn!("inspectRoom: {} mark(s), room will not render", diags.marks.len());
    }

    serialize(&diags, "Failed to serialize diagnostics")
}

// ============================================================================
// Detailed Plan
// ============================================================================

/// Render a whole scan as an annotated plan
///
/// # Arguments
/// * `scan` - `{ entireRoom, rooms, originalRooms }`
/// * `room_names` - names parallel to `originalRooms`
/// * `options` - optional `DetailedOptions` object
///
/// # Returns
/// `{ svg, area, bounds, floors }`
#[wasm_bindgen(js_name = renderDetailedFloorPlan)]
pub fn render_detailed_floor_plan(
    scan: JsValue,
    room_names: JsValue,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    wasm_info!("renderDetailedFloorPlan called");

    let scan: ScanResult = deserialize(scan, "Invalid scan")?;
    let room_names: Vec<String> = deserialize_or_default(room_names, "Invalid room names")?;
    let options: DetailedOptions = deserialize_or_default(options, "Invalid detailed options")?;

    let plan = render_detailed_with_options(&scan, &room_names, &options).map_err(|e| {
        wasm_error!("Detailed plan failed for {} sub-room(s)", scan.rooms.len());
        plan_error("renderDetailedFloorPlan", e)
    })?;

    wasm_info!(
        "renderDetailedFloorPlan completed: {} floor(s), {:.2} m²",
        plan.floors.len(),
        plan.area
    );
    serialize(&plan, "Failed to serialize detailed plan")
}
