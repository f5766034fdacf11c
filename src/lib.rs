//! Room Floor-Plan Renderer WASM Module
//!
//! Turns scanned room geometry (3D point loops for walls, floors, doors,
//! windows and openings) into top-down SVG floor plans. Rooms are first
//! rotated about the vertical axis so a reference wall lies along x, then
//! projected onto the floor plane and serialized.

pub mod api;
pub mod diagnostics;
pub mod errors;
pub mod geometry;
pub mod models;
pub mod renderers;

// Re-export commonly used types
pub use errors::{PlanError, PlanResult};
pub use geometry::{align_room, compute_alignment_angle, compute_view_box, project_to_plane, rotate_point};
pub use models::{Feature, Point3, PointLoop, Room, ScanResult};
pub use renderers::{render, render_polyline, render_with_options, RenderOptions};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // A logger is already installed (module re-initialised)
        return;
    }

    log::info!("Floor-plan renderer WASM module initialized");
}
