//! Plan projection and view box computation

use serde::{Deserialize, Serialize};

use crate::models::Point3;

/// Fraction of each axis' range added as margin on both sides
pub const DEFAULT_PADDING_RATIO: f64 = 0.15;

/// Drop the height: the plan coordinate of `point` is `(x, z)`
///
/// `z` becomes the drawing's vertical axis (SVG `y`).
pub fn project_to_plane(point: &Point3) -> (f64, f64) {
    (point.x, point.z)
}

/// A point on the floor plane
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlanPoint {
    pub x: f64,
    pub z: f64,
}

impl From<&Point3> for PlanPoint {
    fn from(point: &Point3) -> Self {
        let (x, z) = project_to_plane(point);
        Self { x, z }
    }
}

/// Extent of a point set in the floor plane
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlanBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl PlanBounds {
    /// Bounds of `points`, or `None` when there are none
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = PlanBounds {
            min_x: first.x,
            max_x: first.x,
            min_z: first.z,
            max_z: first.z,
        };

        for point in iter {
            bounds.min_x = bounds.min_x.min(point.x);
            bounds.max_x = bounds.max_x.max(point.x);
            bounds.min_z = bounds.min_z.min(point.z);
            bounds.max_z = bounds.max_z.max(point.z);
        }

        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    /// Expand by `ratio` of each axis' range on every side
    pub fn padded(&self, ratio: f64) -> ViewBox {
        let padding_x = self.width() * ratio;
        let padding_z = self.depth() * ratio;

        ViewBox {
            x: self.min_x - padding_x,
            y: self.min_z - padding_z,
            width: self.width() + 2.0 * padding_x,
            height: self.depth() + 2.0 * padding_z,
        }
    }
}

/// SVG view box in plan units
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Value of the `viewBox` attribute: `"x y width height"`
    pub fn to_attribute(&self) -> String {
        // Negative zero prints as 0
        let plain = |v: f64| if v == 0.0 { 0.0 } else { v };
        format!(
            "{} {} {} {}",
            plain(self.x),
            plain(self.y),
            plain(self.width),
            plain(self.height)
        )
    }
}

/// Padded view box around `points` with the default 15% margin
pub fn compute_view_box<'a, I>(points: I) -> Option<ViewBox>
where
    I: IntoIterator<Item = &'a Point3>,
{
    compute_view_box_with_padding(points, DEFAULT_PADDING_RATIO)
}

/// Padded view box around `points`; `None` for an empty set
pub fn compute_view_box_with_padding<'a, I>(points: I, padding_ratio: f64) -> Option<ViewBox>
where
    I: IntoIterator<Item = &'a Point3>,
{
    PlanBounds::from_points(points).map(|bounds| bounds.padded(padding_ratio))
}
