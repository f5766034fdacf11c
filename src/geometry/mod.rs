//! Plan geometry
//!
//! Pure computations over room geometry: alignment about the vertical axis,
//! projection and bounds, polygon measurements, squaring of drifted walls,
//! and unit formatting for annotations.

pub mod alignment;
pub mod bounds;
pub mod polygon;
pub mod squaring;
pub mod units;

// Re-export commonly used types
pub use alignment::{
    align_room, align_room_by, align_room_with_angle, compute_alignment_angle, rotate_point,
    select_reference_wall, AlignedRoom, ReferenceWall,
};
pub use bounds::{
    compute_view_box, compute_view_box_with_padding, project_to_plane, PlanBounds, PlanPoint,
    ViewBox, DEFAULT_PADDING_RATIO,
};
pub use polygon::{polygon_properties, PolygonProperties, RectSize};
