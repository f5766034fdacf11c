//! Renderers module for the floor-plan renderer
//!
//! This module contains the output logic that turns room geometry into
//! SVG: the plain floor-plan emitter and the annotated multi-room plan.

pub mod detailed;
pub mod options;
pub mod svg;

// Re-export commonly used types
pub use detailed::{
    render_detailed, render_detailed_with_options, DetailedPlan, DetailedPlanRenderer, FloorSummary,
};
pub use options::{DetailedOptions, Palette, PolylineStyle, RenderOptions};
pub use svg::{render, render_polyline, render_with_options, SvgPlanRenderer, EMPTY_SVG};
