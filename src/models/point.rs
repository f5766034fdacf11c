//! Scan-space points
//!
//! A `Point3` is one position reported by the capture pipeline. `y` is the
//! vertical axis; `x` and `z` span the floor plane.

use serde::{Deserialize, Serialize};

/// A position in scan space
///
/// Serialized as a three-element array `[x, y, z]`, which is the format the
/// capture pipeline writes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// True when all three coordinates are finite (no NaN or Infinity)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Distance to `other` measured in the floor (x–z) plane
    pub fn plan_distance(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Midpoint between two points
    pub fn midpoint(&self, other: &Point3) -> Point3 {
        Point3::new(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        [p.x, p.y, p.z]
    }
}

/// One ordered boundary polyline (a wall segment, floor outline, door, ...)
///
/// Loops are used as given; the first and last point need not coincide.
pub type PointLoop = Vec<Point3>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_serializes_as_array() {
        let p = Point3::new(1.5, 0.0, -2.0);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[1.5,0.0,-2.0]");

        let back: Point3 = serde_json::from_str("[1.5, 0, -2]").unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_point_rejects_wrong_arity() {
        assert!(serde_json::from_str::<Point3>("[1.0, 2.0]").is_err());
    }

    #[test]
    fn test_plan_distance_ignores_height() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 100.0, 4.0);
        assert_eq!(a.plan_distance(&b), 5.0);
    }

    #[test]
    fn test_is_finite() {
        assert!(Point3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Point3::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Point3::new(0.0, 0.0, f64::INFINITY).is_finite());
    }
}
