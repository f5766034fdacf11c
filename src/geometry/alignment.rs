//! Room alignment
//!
//! Rotates a room's geometry about the vertical axis so that a reference wall
//! runs along the positive x axis. Every point of every collection is rotated
//! by the same angle, computed once from the unrotated reference wall.

use serde::{Deserialize, Serialize};

use crate::errors::{PlanError, PlanResult};
use crate::models::{Point3, Room};

use super::polygon::plan_extent_length;

/// How the reference wall is chosen
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceWall {
    /// `walls[0]`, in scan order
    #[default]
    First,
    /// The wall with the longest x–z extent; the earliest wins ties
    Longest,
}

/// A rotated room together with the angle that produced it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AlignedRoom {
    pub room: Room,
    /// Rotation applied, in radians
    pub angle: f64,
}

/// Rotate the x/z components of `point` about the origin; `y` is unchanged
pub fn rotate_point(point: &Point3, angle: f64) -> Point3 {
    let (sin, cos) = angle.sin_cos();
    Point3::new(
        point.x * cos - point.z * sin,
        point.y,
        point.x * sin + point.z * cos,
    )
}

/// Rotate `point` about `center` in the x–z plane by `degrees`
pub fn rotate_point_around(point: &Point3, center: &Point3, degrees: f64) -> Point3 {
    let offset = Point3::new(point.x - center.x, point.y, point.z - center.z);
    let rotated = rotate_point(&offset, degrees.to_radians());
    Point3::new(rotated.x + center.x, point.y, rotated.z + center.z)
}

/// Angle that brings the segment `wall[0] -> wall[1]` onto the positive x axis
///
/// Returns `-atan2(dz, dx)`. A wall with fewer than two points has no
/// direction and is rejected.
pub fn compute_alignment_angle(wall: &[Point3]) -> PlanResult<f64> {
    match wall {
        [start, end, ..] => {
            let dx = end.x - start.x;
            let dz = end.z - start.z;
            Ok(-dz.atan2(dx))
        }
        _ => Err(PlanError::InvalidGeometry(format!(
            "reference wall needs at least 2 points, found {}",
            wall.len()
        ))),
    }
}

/// Index of the reference wall under `strategy`, or `None` for a room without walls
pub fn select_reference_wall(room: &Room, strategy: ReferenceWall) -> Option<usize> {
    if room.walls.is_empty() {
        return None;
    }

    match strategy {
        ReferenceWall::First => Some(0),
        ReferenceWall::Longest => {
            let mut best = 0;
            let mut best_length = plan_extent_length(&room.walls[0]);
            for (idx, wall) in room.walls.iter().enumerate().skip(1) {
                let length = plan_extent_length(wall);
                if length > best_length {
                    best = idx;
                    best_length = length;
                }
            }
            Some(best)
        }
    }
}

/// Align a room using `walls[0]` as the reference
pub fn align_room(room: &Room) -> PlanResult<AlignedRoom> {
    align_room_by(room, ReferenceWall::First)
}

/// Align a room using the wall chosen by `strategy`
///
/// A room without walls, or without a single point, is returned unrotated
/// (angle 0).
pub fn align_room_by(room: &Room, strategy: ReferenceWall) -> PlanResult<AlignedRoom> {
    let angle = match select_reference_wall(room, strategy) {
        Some(_) if room.is_empty() => {
            log::debug!("Room has no points, skipping rotation");
            0.0
        }
        Some(idx) => compute_alignment_angle(&room.walls[idx])?,
        None => {
            log::debug!("Room has no walls, skipping rotation");
            0.0
        }
    };

    log::debug!(
        "Aligning room ({} walls, {} points) by {:.6} rad",
        room.walls.len(),
        room.point_count(),
        angle
    );

    Ok(AlignedRoom {
        room: align_room_with_angle(room, angle),
        angle,
    })
}

/// Rotate every point of `room` by a caller-supplied angle
///
/// Sub-rooms of a scan use the entire room's angle so they overlay it.
pub fn align_room_with_angle(room: &Room, angle: f64) -> Room {
    room.map_points(|point| rotate_point(point, angle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPS: f64 = 1e-9;

    fn p(x: f64, z: f64) -> Point3 {
        Point3::new(x, 0.0, z)
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let rotated = rotate_point(&Point3::new(1.0, 2.5, 0.0), FRAC_PI_2);
        assert!(rotated.x.abs() < EPS);
        assert!((rotated.z - 1.0).abs() < EPS);
        assert_eq!(rotated.y, 2.5);
    }

    #[test]
    fn test_rotate_point_around_center() {
        let rotated = rotate_point_around(&p(2.0, 1.0), &p(1.0, 1.0), 90.0);
        assert!((rotated.x - 1.0).abs() < EPS);
        assert!((rotated.z - 2.0).abs() < EPS);
    }

    #[test]
    fn test_alignment_angle_diagonal_wall() {
        let angle = compute_alignment_angle(&[p(0.0, 0.0), p(1.0, 1.0)]).unwrap();
        assert!((angle + FRAC_PI_4).abs() < EPS);
    }

    #[test]
    fn test_alignment_angle_uses_first_two_points_only() {
        let angle = compute_alignment_angle(&[p(0.0, 0.0), p(3.0, 0.0), p(3.0, 9.0)]).unwrap();
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_alignment_angle_rejects_short_wall() {
        assert!(matches!(
            compute_alignment_angle(&[p(1.0, 1.0)]),
            Err(PlanError::InvalidGeometry(_))
        ));
        assert!(compute_alignment_angle(&[]).is_err());
    }

    #[test]
    fn test_align_room_without_walls_is_identity() {
        let room = Room {
            floors: vec![vec![p(1.0, 2.0), p(3.0, 4.0)]],
            ..Room::default()
        };
        let aligned = align_room(&room).unwrap();
        assert_eq!(aligned.angle, 0.0);
        assert_eq!(aligned.room, room);
    }

    #[test]
    fn test_align_room_rotates_every_collection() {
        let room = Room {
            walls: vec![vec![p(0.0, 0.0), p(0.0, 2.0)]],
            doors: vec![vec![p(0.0, 1.0)]],
            objects: vec![vec![p(0.0, 3.0)]],
            ..Room::default()
        };
        let aligned = align_room(&room).unwrap();

        assert!((aligned.room.walls[0][1].x - 2.0).abs() < EPS);
        assert!(aligned.room.walls[0][1].z.abs() < EPS);
        assert!((aligned.room.doors[0][0].x - 1.0).abs() < EPS);
        assert!((aligned.room.objects[0][0].x - 3.0).abs() < EPS);
    }

    #[test]
    fn test_longest_reference_wall() {
        let room = Room {
            walls: vec![
                vec![p(0.0, 0.0), p(1.0, 0.0)],
                vec![p(0.0, 0.0), p(0.0, 5.0)],
                vec![p(0.0, 0.0), p(5.0, 0.0)],
            ],
            ..Room::default()
        };
        assert_eq!(select_reference_wall(&room, ReferenceWall::First), Some(0));
        assert_eq!(select_reference_wall(&room, ReferenceWall::Longest), Some(1));

        let aligned = align_room_by(&room, ReferenceWall::Longest).unwrap();
        let wall = &aligned.room.walls[1];
        assert!((wall[1].z - wall[0].z).abs() < EPS);
    }

    #[test]
    fn test_align_room_of_empty_loops_is_identity() {
        let room = Room {
            walls: vec![vec![]],
            floors: vec![vec![]],
            ..Room::default()
        };
        let aligned = align_room(&room).unwrap();
        assert_eq!(aligned.angle, 0.0);
        assert_eq!(aligned.room, room);
    }

    #[test]
    fn test_reference_wall_serde_names() {
        let strategy: ReferenceWall = serde_json::from_str("\"longest\"").unwrap();
        assert_eq!(strategy, ReferenceWall::Longest);
    }
}
