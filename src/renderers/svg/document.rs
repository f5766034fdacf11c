//! SVG document assembly
//!
//! Collects serialized elements and wraps them in the root `<svg>` element.

use crate::geometry::ViewBox;

use super::elements::render_polyline_with;
use crate::models::Point3;
use crate::renderers::options::PolylineStyle;

/// Output for geometry without a single point
pub const EMPTY_SVG: &str = "<svg></svg>";

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Builder for one SVG document
pub struct SvgDocument {
    view_box: ViewBox,
    include_xmlns: bool,
    body: String,
    element_count: usize,
}

impl SvgDocument {
    /// Start a document over `view_box`
    pub fn new(view_box: ViewBox) -> Self {
        Self {
            view_box,
            include_xmlns: false,
            body: String::new(),
            element_count: 0,
        }
    }

    /// Declare the SVG namespace on the root element
    pub fn with_xmlns(mut self, include: bool) -> Self {
        self.include_xmlns = include;
        self
    }

    /// Append a serialized element
    pub fn push(&mut self, element: &str) {
        self.body.push_str(element);
        self.element_count += 1;
    }

    /// Append a polyline per non-empty loop; returns how many were written
    pub fn push_polylines(&mut self, loops: &[Vec<Point3>], style: &PolylineStyle) -> usize {
        self.push_polylines_with(loops, style, &[])
    }

    pub fn push_polylines_with(
        &mut self,
        loops: &[Vec<Point3>],
        style: &PolylineStyle,
        extra: &[(&str, String)],
    ) -> usize {
        let mut written = 0;
        for points in loops {
            if let Some(element) = render_polyline_with(points, style, extra) {
                self.push(&element);
                written += 1;
            }
        }
        written
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Close the root element and return the markup
    pub fn finish(self) -> String {
        let xmlns = if self.include_xmlns {
            format!(" xmlns=\"{}\"", SVG_NAMESPACE)
        } else {
            String::new()
        };

        format!(
            "<svg{} viewBox=\"{}\">{}</svg>",
            xmlns,
            self.view_box.to_attribute(),
            self.body
        )
    }
}
