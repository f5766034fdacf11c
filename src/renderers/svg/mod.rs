//! SVG floor-plan output
//!
//! Projects an aligned room onto the floor plane and serializes its outlines.
//! Walls, floors, doors and windows are drawn in that order. Openings widen
//! the view box but are not drawn.

pub mod document;
pub mod elements;

pub use document::{SvgDocument, EMPTY_SVG};
pub use elements::{render_polyline, render_polyline_with};

use crate::diagnostics::validate_room_with;
use crate::errors::PlanResult;
use crate::geometry::{align_room_by, compute_view_box_with_padding, ViewBox};
use crate::models::Room;
use crate::renderers::options::RenderOptions;

/// Floor-plan emitter
#[derive(Clone, Debug, Default)]
pub struct SvgPlanRenderer {
    options: RenderOptions,
}

impl SvgPlanRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Validate, align and serialize `room`
    ///
    /// A room without any plan points renders as `<svg></svg>`.
    pub fn render(&self, room: &Room) -> PlanResult<String> {
        validate_room_with(room, self.options.reference_wall)?;
        let aligned = align_room_by(room, self.options.reference_wall)?;
        Ok(self.emit(&aligned.room))
    }

    /// View box `render` would use for `room`; `None` when it renders empty
    ///
    /// Rejects the same rooms `render` rejects.
    pub fn view_box(&self, room: &Room) -> PlanResult<Option<ViewBox>> {
        validate_room_with(room, self.options.reference_wall)?;
        let aligned = align_room_by(room, self.options.reference_wall)?;
        Ok(compute_view_box_with_padding(
            aligned.room.plan_points(),
            self.options.padding_ratio,
        ))
    }

    fn emit(&self, room: &Room) -> String {
        let Some(view_box) = compute_view_box_with_padding(room.plan_points(), self.options.padding_ratio)
        else {
            log::debug!("Room has no plan points, emitting empty SVG");
            return EMPTY_SVG.to_string();
        };

        let opts = &self.options;
        let mut doc = SvgDocument::new(view_box).with_xmlns(opts.include_xmlns);
        doc.push_polylines(&room.walls, &opts.wall_style);
        doc.push_polylines(&room.floors, &opts.floor_style);
        doc.push_polylines(&room.doors, &opts.door_style);
        doc.push_polylines(&room.windows, &opts.window_style);

        log::debug!(
            "Floor plan emitted: {} polylines, viewBox {}",
            doc.element_count(),
            view_box.to_attribute()
        );
        doc.finish()
    }
}

/// Render `room` with default options
pub fn render(room: &Room) -> PlanResult<String> {
    SvgPlanRenderer::new().render(room)
}

/// Render `room` with caller-supplied options
pub fn render_with_options(room: &Room, options: &RenderOptions) -> PlanResult<String> {
    SvgPlanRenderer::with_options(options.clone()).render(room)
}
