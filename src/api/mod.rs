//! Floor-Plan Renderer WASM API
//!
//! This module provides the JavaScript-facing API. The mobile app calls it
//! for on-device previews and the report pipeline for plan images.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging, JS value conversion, and error mapping
//! - `render`: Floor plan, detailed plan, alignment, bounds, and diagnostics

pub mod helpers;
pub mod render;

pub use render::{
    align_room, compute_view_box, inspect_room, render_detailed_floor_plan, render_floor_plan,
    render_floor_plan_json,
};
