//! Polygon measurements in the floor plane
//!
//! Floor outlines are treated as implicitly closed polygons in x–z. Wall loops
//! are measured by the diagonal of their extent.

use serde::{Deserialize, Serialize};

use crate::models::{Point3, PointLoop};

use super::bounds::{PlanBounds, PlanPoint};

/// Width and height of a rectangle
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RectSize {
    pub width: f64,
    pub height: f64,
}

/// Area, centroid and tightest rectangle of one floor outline
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PolygonProperties {
    /// Area in squared input units
    pub area: f64,
    /// `None` for degenerate outlines (fewer than 3 points or zero area)
    pub centroid: Option<PlanPoint>,
    pub bounding_rect: Option<RectSize>,
}

/// Twice the signed shoelace area
fn signed_double_area(points: &[Point3]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = &points[i];
            let b = &points[(i + 1) % n];
            a.x * b.z - b.x * a.z
        })
        .sum()
}

/// Unsigned area of the closed polygon; 0 for fewer than 3 points
pub fn polygon_area(points: &[Point3]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    signed_double_area(points).abs() / 2.0
}

/// Area-weighted centroid of the closed polygon
pub fn polygon_centroid(points: &[Point3]) -> Option<PlanPoint> {
    if points.len() < 3 {
        return None;
    }

    let n = points.len();
    let mut double_area = 0.0;
    let mut cx = 0.0;
    let mut cz = 0.0;
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        let cross = a.x * b.z - b.x * a.z;
        double_area += cross;
        cx += (a.x + b.x) * cross;
        cz += (a.z + b.z) * cross;
    }

    if double_area == 0.0 {
        return None;
    }

    // Signed area keeps the centroid right for either winding
    let six_area = 3.0 * double_area;
    Some(PlanPoint {
        x: cx / six_area,
        z: cz / six_area,
    })
}

/// Smallest-area rectangle with one side along a polygon edge
///
/// Every edge direction is tried; the first minimum wins.
pub fn minimum_bounding_rect(points: &[Point3]) -> Option<RectSize> {
    if points.len() < 3 {
        return None;
    }

    let n = points.len();
    let mut best: Option<(f64, RectSize)> = None;

    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        let angle = (b.z - a.z).atan2(b.x - a.x);
        let (sin, cos) = (-angle).sin_cos();

        let rotated: Vec<Point3> = points
            .iter()
            .map(|p| Point3::new(p.x * cos - p.z * sin, 0.0, p.x * sin + p.z * cos))
            .collect();
        let Some(bounds) = PlanBounds::from_points(&rotated) else {
            continue;
        };

        let size = RectSize {
            width: bounds.width(),
            height: bounds.depth(),
        };
        let area = size.width * size.height;
        if best.map_or(true, |(best_area, _)| area < best_area) {
            best = Some((area, size));
        }
    }

    best.map(|(_, size)| size)
}

/// Area, centroid and tightest rectangle of a floor outline
pub fn polygon_properties(points: &[Point3]) -> PolygonProperties {
    let area = polygon_area(points);
    if area == 0.0 {
        return PolygonProperties {
            area: 0.0,
            centroid: None,
            bounding_rect: None,
        };
    }

    PolygonProperties {
        area,
        centroid: polygon_centroid(points),
        bounding_rect: minimum_bounding_rect(points),
    }
}

/// Even-odd containment test of `(x, z)` against a set of polygons
///
/// Crossings are counted across all polygons together, so a point inside two
/// overlapping outlines counts as outside.
pub fn point_in_polygons(x: f64, z: f64, polygons: &[PointLoop]) -> bool {
    let mut inside = false;

    for polygon in polygons {
        let n = polygon.len();
        if n == 0 {
            continue;
        }
        let mut j = n - 1;
        for i in 0..n {
            let (xi, zi) = (polygon[i].x, polygon[i].z);
            let (xj, zj) = (polygon[j].x, polygon[j].z);
            let crosses = (zi > z) != (zj > z) && x < (xj - xi) * (z - zi) / (zj - zi) + xi;
            if crosses {
                inside = !inside;
            }
            j = i;
        }
    }

    inside
}

/// Endpoints of a loop's extent diagonal, flattened to `y = 0`
///
/// When some point sits at the (min x, min z) corner the diagonal runs from
/// that corner to (max x, max z); otherwise it runs (min x, max z) to
/// (max x, min z). For a straight wall this recovers its two ends.
pub fn plan_extent_endpoints(points: &[Point3]) -> Option<(Point3, Point3)> {
    let bounds = PlanBounds::from_points(points)?;
    let has_min_corner = points
        .iter()
        .any(|p| p.x == bounds.min_x && p.z == bounds.min_z);

    if has_min_corner {
        Some((
            Point3::new(bounds.min_x, 0.0, bounds.min_z),
            Point3::new(bounds.max_x, 0.0, bounds.max_z),
        ))
    } else {
        Some((
            Point3::new(bounds.min_x, 0.0, bounds.max_z),
            Point3::new(bounds.max_x, 0.0, bounds.min_z),
        ))
    }
}

/// Length of the extent diagonal; 0 for an empty loop
pub fn plan_extent_length(points: &[Point3]) -> f64 {
    plan_extent_endpoints(points)
        .map(|(a, b)| a.plan_distance(&b))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, z: f64) -> Point3 {
        Point3::new(x, 0.0, z)
    }

    fn rectangle(w: f64, h: f64) -> Vec<Point3> {
        vec![p(0.0, 0.0), p(w, 0.0), p(w, h), p(0.0, h)]
    }

    #[test]
    fn test_area_and_centroid_of_rectangle() {
        let rect = rectangle(4.0, 2.0);
        assert_eq!(polygon_area(&rect), 8.0);

        let centroid = polygon_centroid(&rect).unwrap();
        assert!((centroid.x - 2.0).abs() < 1e-12);
        assert!((centroid.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_centroid_independent_of_winding() {
        let mut rect = rectangle(4.0, 2.0);
        rect.reverse();
        let centroid = polygon_centroid(&rect).unwrap();
        assert!((centroid.x - 2.0).abs() < 1e-12);
        assert!((centroid.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_polygons() {
        assert_eq!(polygon_area(&[p(0.0, 0.0), p(1.0, 1.0)]), 0.0);
        let collinear = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
        let props = polygon_properties(&collinear);
        assert_eq!(props.area, 0.0);
        assert!(props.centroid.is_none());
        assert!(props.bounding_rect.is_none());
    }

    #[test]
    fn test_minimum_bounding_rect_of_rotated_square() {
        // Unit square rotated 45 degrees: axis-aligned box is 2x2, tight box is sqrt2 x sqrt2
        let diamond = [p(1.0, 0.0), p(2.0, 1.0), p(1.0, 2.0), p(0.0, 1.0)];
        let rect = minimum_bounding_rect(&diamond).unwrap();
        assert!((rect.width * rect.height - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_in_polygons() {
        let floors = vec![rectangle(4.0, 2.0)];
        assert!(point_in_polygons(1.0, 1.0, &floors));
        assert!(!point_in_polygons(5.0, 1.0, &floors));
        assert!(!point_in_polygons(1.0, -0.5, &floors));
        assert!(!point_in_polygons(1.0, 1.0, &[]));
    }

    #[test]
    fn test_extent_endpoints() {
        let rising = [p(1.0, 1.0), p(3.0, 4.0)];
        let (a, b) = plan_extent_endpoints(&rising).unwrap();
        assert_eq!((a, b), (p(1.0, 1.0), p(3.0, 4.0)));

        let falling = [p(1.0, 4.0), p(3.0, 1.0)];
        let (a, b) = plan_extent_endpoints(&falling).unwrap();
        assert_eq!((a, b), (p(1.0, 4.0), p(3.0, 1.0)));

        assert_eq!(plan_extent_length(&rising), 13f64.sqrt());
        assert_eq!(plan_extent_length(&[]), 0.0);
    }
}
