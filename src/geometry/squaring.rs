//! Squaring of nearly-orthogonal walls and doors
//!
//! Scans drift by a degree or two. After alignment, walls that are almost at a
//! right-angle multiple to the room's dominant wall are snapped onto it, and
//! doors crossing a wall are snapped to that wall's direction.

use crate::models::{Point3, PointLoop};

use super::alignment::rotate_point_around;

/// Deviations at or below this many degrees are left alone
pub const SQUARING_TOLERANCE_DEG: f64 = 0.3;

/// Walls deviating by more than this many degrees are taken to be deliberately angled
pub const SQUARING_MAX_DEG: f64 = 10.0;

/// Two walls within this many degrees are counted as parallel
pub const PARALLEL_TOLERANCE_DEG: f64 = 0.01;

/// Direction of `start -> end` in degrees, measured from +x towards +z
pub fn segment_angle_deg(start: &Point3, end: &Point3) -> f64 {
    (end.z - start.z).atan2(end.x - start.x).to_degrees()
}

/// Signed distance from `degrees` to the nearest multiple of 90, in `[-45, 45]`
pub fn right_angle_residual(degrees: f64) -> f64 {
    degrees - 90.0 * (degrees / 90.0).round()
}

/// Unsigned angle between two segments' directions, in `[0, 180]` degrees
///
/// Only the first two points of each loop are used. `None` when either has
/// fewer than two points or zero length.
pub fn angle_between_deg(segment: &[Point3], reference: &[Point3]) -> Option<f64> {
    let ([a0, a1, ..], [b0, b1, ..]) = (reference, segment) else {
        return None;
    };

    let (ax, az) = (a1.x - a0.x, a1.z - a0.z);
    let (bx, bz) = (b1.x - b0.x, b1.z - b0.z);
    let magnitudes = (ax * ax + az * az).sqrt() * (bx * bx + bz * bz).sqrt();
    if magnitudes == 0.0 {
        return None;
    }

    let cos = ((ax * bx + az * bz) / magnitudes).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Pick the wall most other walls run parallel to
///
/// Starts from `fallback` (usually the longest wall) and only moves to a wall
/// with strictly more parallel partners.
pub fn dominant_wall(walls: &[PointLoop], fallback: usize) -> usize {
    let parallel_counts: Vec<usize> = walls
        .iter()
        .map(|wall| {
            walls
                .iter()
                .filter(|other| {
                    angle_between_deg(other, wall)
                        .is_some_and(|angle| angle < PARALLEL_TOLERANCE_DEG)
                })
                .count()
        })
        .collect();

    let mut best = fallback.min(walls.len().saturating_sub(1));
    for (idx, count) in parallel_counts.iter().enumerate() {
        if parallel_counts.get(best).copied().unwrap_or(0) < *count {
            best = idx;
        }
    }
    best
}

/// Rotate every point of `points` about the midpoint of its first two points
fn rotate_about_first_segment(points: &[Point3], degrees: f64) -> PointLoop {
    let center = points[0].midpoint(&points[1]);
    points
        .iter()
        .map(|point| rotate_point_around(point, &center, degrees))
        .collect()
}

/// Snap two-point walls onto right-angle multiples of `walls[reference]`
///
/// Returns how many walls were adjusted.
pub fn square_walls(walls: &mut [PointLoop], reference: usize) -> usize {
    let Some([r0, r1, ..]) = walls.get(reference).map(Vec::as_slice) else {
        return 0;
    };
    let reference_angle = segment_angle_deg(r0, r1);

    let mut adjusted = 0;
    for (idx, wall) in walls.iter_mut().enumerate() {
        if idx == reference || wall.len() != 2 {
            continue;
        }

        let residual = right_angle_residual(segment_angle_deg(&wall[0], &wall[1]) - reference_angle);
        if residual.abs() <= SQUARING_TOLERANCE_DEG || residual.abs() > SQUARING_MAX_DEG {
            continue;
        }

        log::trace!("Squaring wall {} by {:.3} deg", idx, -residual);
        *wall = rotate_about_first_segment(wall, -residual);
        adjusted += 1;
    }

    adjusted
}

fn ccw(a: &Point3, b: &Point3, c: &Point3) -> bool {
    (c.z - a.z) * (b.x - a.x) > (b.z - a.z) * (c.x - a.x)
}

/// Strict intersection test of segments `p1-p2` and `q1-q2` in x–z
pub fn segments_intersect(p1: &Point3, p2: &Point3, q1: &Point3, q2: &Point3) -> bool {
    ccw(p1, q1, q2) != ccw(p2, q1, q2) && ccw(p1, p2, q1) != ccw(p1, p2, q2)
}

/// Snap each door that crosses a wall onto that wall's direction
///
/// Walls are visited in order; a door is adjusted at most once. Returns how
/// many doors were adjusted.
pub fn align_doors_to_walls(doors: &mut [PointLoop], walls: &[PointLoop]) -> usize {
    let mut adjusted = vec![false; doors.len()];

    for wall in walls {
        let [w0, w1, ..] = wall.as_slice() else {
            continue;
        };
        let wall_angle = segment_angle_deg(w0, w1);

        for (idx, door) in doors.iter_mut().enumerate() {
            if adjusted[idx] || door.len() < 2 {
                continue;
            }
            if !segments_intersect(w0, w1, &door[0], &door[1]) {
                continue;
            }

            let residual = right_angle_residual(segment_angle_deg(&door[0], &door[1]) - wall_angle);
            if residual.abs() > SQUARING_TOLERANCE_DEG {
                log::trace!("Aligning door {} by {:.3} deg", idx, -residual);
                *door = rotate_about_first_segment(door, -residual);
                adjusted[idx] = true;
            }
        }
    }

    adjusted.iter().filter(|done| **done).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, z: f64) -> Point3 {
        Point3::new(x, 0.0, z)
    }

    fn wall_at(degrees: f64, length: f64, origin: (f64, f64)) -> PointLoop {
        let rad = degrees.to_radians();
        vec![
            p(origin.0, origin.1),
            p(origin.0 + rad.cos() * length, origin.1 + rad.sin() * length),
        ]
    }

    #[test]
    fn test_right_angle_residual() {
        assert!((right_angle_residual(92.0) - 2.0).abs() < 1e-12);
        assert!((right_angle_residual(-3.5) + 3.5).abs() < 1e-12);
        assert!((right_angle_residual(178.0) + 2.0).abs() < 1e-12);
        assert_eq!(right_angle_residual(270.0), 0.0);
    }

    #[test]
    fn test_angle_between() {
        let a = vec![p(0.0, 0.0), p(1.0, 0.0)];
        let b = vec![p(0.0, 0.0), p(0.0, 2.0)];
        assert!((angle_between_deg(&b, &a).unwrap() - 90.0).abs() < 1e-9);
        assert!(angle_between_deg(&[p(0.0, 0.0)], &a).is_none());
        assert!(angle_between_deg(&[p(1.0, 1.0), p(1.0, 1.0)], &a).is_none());
    }

    #[test]
    fn test_square_walls_snaps_small_deviation() {
        let mut walls = vec![
            wall_at(0.0, 4.0, (0.0, 0.0)),
            wall_at(92.0, 3.0, (4.0, 0.0)),
            wall_at(45.0, 3.0, (0.0, 3.0)),
            wall_at(180.1, 4.0, (4.0, 3.0)),
        ];

        let adjusted = square_walls(&mut walls, 0);
        assert_eq!(adjusted, 1);

        let angle = segment_angle_deg(&walls[1][0], &walls[1][1]);
        assert!((angle - 90.0).abs() < 1e-9);
        // Angled wall and within-tolerance wall untouched
        assert!((segment_angle_deg(&walls[2][0], &walls[2][1]) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_square_walls_keeps_midpoint() {
        let mut walls = vec![wall_at(0.0, 4.0, (0.0, 0.0)), wall_at(88.0, 3.0, (4.0, 0.0))];
        let before = walls[1][0].midpoint(&walls[1][1]);
        square_walls(&mut walls, 0);
        let after = walls[1][0].midpoint(&walls[1][1]);
        assert!(before.plan_distance(&after) < 1e-9);
    }

    #[test]
    fn test_dominant_wall_prefers_most_parallel() {
        let walls = vec![
            wall_at(10.0, 9.0, (0.0, 0.0)),
            wall_at(0.0, 1.0, (0.0, 1.0)),
            wall_at(0.0, 1.0, (0.0, 2.0)),
        ];
        assert_eq!(dominant_wall(&walls, 0), 1);
        assert_eq!(dominant_wall(&[], 3), 0);
    }

    #[test]
    fn test_align_doors_to_crossing_wall() {
        let walls = vec![vec![p(0.0, 0.0), p(4.0, 0.0)]];
        let mut doors = vec![
            wall_at(3.0, 1.0, (1.0, -0.02)),
            vec![p(1.0, 5.0), p(2.0, 5.3)],
        ];

        let adjusted = align_doors_to_walls(&mut doors, &walls);
        assert_eq!(adjusted, 1);
        let angle = segment_angle_deg(&doors[0][0], &doors[0][1]);
        assert!(angle.abs() < 1e-9);
        // Door away from every wall untouched
        assert_eq!(doors[1], vec![p(1.0, 5.0), p(2.0, 5.3)]);
    }

    #[test]
    fn test_segments_intersect() {
        assert!(segments_intersect(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0)));
        assert!(!segments_intersect(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 1.0)));
    }
}
