//! Render configuration
//!
//! Options arrive from JavaScript as plain objects; every field is optional
//! and falls back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::geometry::{ReferenceWall, DEFAULT_PADDING_RATIO};

/// Stroke and fill of one polyline class
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PolylineStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
}

impl PolylineStyle {
    pub fn new(stroke: impl Into<String>, stroke_width: f64, fill: impl Into<String>) -> Self {
        Self {
            stroke: stroke.into(),
            stroke_width,
            fill: fill.into(),
        }
    }

    /// Unfilled stroke
    pub fn outline(stroke: impl Into<String>, stroke_width: f64) -> Self {
        Self::new(stroke, stroke_width, "none")
    }
}

/// Options for the floor-plan emitter
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Margin added on each side, as a fraction of the axis' range
    pub padding_ratio: f64,

    /// Which wall the room is aligned on
    pub reference_wall: ReferenceWall,

    /// Emit `xmlns` on the root element (needed by standalone SVG viewers)
    pub include_xmlns: bool,

    pub wall_style: PolylineStyle,
    pub floor_style: PolylineStyle,
    pub door_style: PolylineStyle,
    pub window_style: PolylineStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            padding_ratio: DEFAULT_PADDING_RATIO,
            reference_wall: ReferenceWall::First,
            include_xmlns: false,
            wall_style: PolylineStyle::outline("black", 0.1),
            floor_style: PolylineStyle::new("black", 0.0, "white"),
            door_style: PolylineStyle::outline("#777", 0.08),
            window_style: PolylineStyle::outline("#ccc", 0.08),
        }
    }
}

/// Colours of the detailed plan
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    pub wall: String,
    pub floor: String,
    pub floor_fill: String,
    pub sub_floor: String,
    pub sub_floor_fill: String,
    pub door: String,
    pub window: String,
    pub object: String,
    pub object_fill: String,
    pub label: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: "#050505".to_string(),
            floor: "#eaeaea".to_string(),
            floor_fill: "#eaeaea".to_string(),
            sub_floor: "#e0e0e0".to_string(),
            sub_floor_fill: "#e0e0e0".to_string(),
            door: "#111111".to_string(),
            window: "#1c1c1c".to_string(),
            object: "#9b9b9b".to_string(),
            object_fill: "#bababa".to_string(),
            label: "#000000".to_string(),
        }
    }
}

/// Options for the detailed (annotated) plan
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DetailedOptions {
    /// Plan units per meter; stroke widths and fonts scale with it
    pub scale_factor: f64,

    pub padding_ratio: f64,

    pub reference_wall: ReferenceWall,

    /// Multiplier applied to measured wall lengths before labelling
    pub length_correction: f64,

    /// Snap walls that drifted a few degrees off square
    pub square_walls: bool,

    /// Snap doors onto the walls they cross
    pub align_doors: bool,

    pub palette: Palette,
}

impl Default for DetailedOptions {
    fn default() -> Self {
        Self {
            scale_factor: 100.0,
            padding_ratio: DEFAULT_PADDING_RATIO,
            reference_wall: ReferenceWall::Longest,
            length_correction: 1.15,
            square_walls: true,
            align_doors: true,
            palette: Palette::default(),
        }
    }
}

impl DetailedOptions {
    pub fn wall_width(&self) -> f64 {
        0.08 * self.scale_factor
    }

    pub fn floor_width(&self) -> f64 {
        0.08 * self.scale_factor
    }

    pub fn sub_floor_width(&self) -> f64 {
        0.04 * self.scale_factor
    }

    pub fn door_width(&self) -> f64 {
        0.02 * self.scale_factor
    }

    pub fn window_width(&self) -> f64 {
        0.02 * self.scale_factor
    }

    pub fn object_width(&self) -> f64 {
        0.05 * self.scale_factor
    }
}
