//! Geometry diagnostics - detects input the aligner and renderer cannot trust
//!
//! Checks performed:
//! - Reference wall: must have two points (error); coincident points give a
//!   zero angle (warning); a room without walls is rendered unrotated (info).
//!   A room without a single point renders empty and skips these checks.
//! - Every loop: non-finite coordinates (error), single points (warning),
//!   empty loops (info)

use crate::errors::{PlanError, PlanResult};
use crate::geometry::{select_reference_wall, ReferenceWall};
use crate::models::{Feature, Room};

use super::{DiagnosticMark, DiagnosticSeverity, Diagnostics};

pub const NON_FINITE_COORDINATE: &str = "non_finite_coordinate";
pub const SHORT_REFERENCE_WALL: &str = "short_reference_wall";
pub const ZERO_LENGTH_REFERENCE_WALL: &str = "zero_length_reference_wall";
pub const SINGLE_POINT_LOOP: &str = "single_point_loop";
pub const EMPTY_LOOP: &str = "empty_loop";
pub const NO_WALLS: &str = "no_walls";

/// Inspect a room aligned on `walls[0]`
pub fn inspect_room(room: &Room) -> Diagnostics {
    inspect_room_with(room, ReferenceWall::First)
}

/// Inspect a room that will be aligned on the wall chosen by `strategy`
pub fn inspect_room_with(room: &Room, strategy: ReferenceWall) -> Diagnostics {
    let mut diags = Diagnostics::new();
    let reference = select_reference_wall(room, strategy);

    match reference {
        None => diags.add(DiagnosticMark::new(
            Feature::Walls,
            0,
            DiagnosticSeverity::Info,
            NO_WALLS,
            "Room has no walls; it will be rendered without rotation",
        )),
        Some(_) if room.is_empty() => {}
        Some(idx) => {
            let wall = &room.walls[idx];
            if wall.len() < 2 {
                diags.add(DiagnosticMark::new(
                    Feature::Walls,
                    idx,
                    DiagnosticSeverity::Error,
                    SHORT_REFERENCE_WALL,
                    format!("Reference wall has {} point(s); 2 are needed for alignment", wall.len()),
                ));
            } else if wall[0].plan_distance(&wall[1]) == 0.0 {
                diags.add(DiagnosticMark::new(
                    Feature::Walls,
                    idx,
                    DiagnosticSeverity::Warning,
                    ZERO_LENGTH_REFERENCE_WALL,
                    "Reference wall starts with coincident points; alignment angle falls back to 0",
                ));
            }
        }
    }

    for (feature, loop_idx, points) in room.iter_loops() {
        if let Some(point_idx) = points.iter().position(|p| !p.is_finite()) {
            diags.add(
                DiagnosticMark::new(
                    feature,
                    loop_idx,
                    DiagnosticSeverity::Error,
                    NON_FINITE_COORDINATE,
                    format!("Non-finite coordinate in {}[{}]", feature, loop_idx),
                )
                .at_point(point_idx),
            );
        }

        let is_reference = feature == Feature::Walls && Some(loop_idx) == reference;
        match points.len() {
            0 if !is_reference => diags.add(DiagnosticMark::new(
                feature,
                loop_idx,
                DiagnosticSeverity::Info,
                EMPTY_LOOP,
                format!("Empty loop in {}; it will not be drawn", feature),
            )),
            1 if !is_reference => diags.add(DiagnosticMark::new(
                feature,
                loop_idx,
                DiagnosticSeverity::Warning,
                SINGLE_POINT_LOOP,
                format!("Single-point loop in {}; it draws nothing visible", feature),
            )),
            _ => {}
        }
    }

    diags
}

/// Turn an error mark into the matching `PlanError`
fn mark_to_error(mark: &DiagnosticMark) -> PlanError {
    match (mark.kind.as_str(), mark.point_index) {
        (NON_FINITE_COORDINATE, Some(point_index)) => PlanError::InvalidCoordinate {
            collection: mark.collection,
            loop_index: mark.loop_index,
            point_index,
        },
        _ => PlanError::InvalidGeometry(mark.message.clone()),
    }
}

/// Fail on the first error found by `inspect_room`
pub fn validate_room(room: &Room) -> PlanResult<()> {
    validate_room_with(room, ReferenceWall::First)
}

/// Fail on the first error found by `inspect_room_with`
pub fn validate_room_with(room: &Room, strategy: ReferenceWall) -> PlanResult<()> {
    let diags = inspect_room_with(room, strategy);
    match diags.first_error() {
        Some(mark) => {
            log::warn!("Room rejected: {}", mark.message);
            Err(mark_to_error(mark))
        }
        None => Ok(()),
    }
}

/// Fail on the first non-finite coordinate, ignoring wall structure
///
/// Used for sub-rooms, which reuse their parent's alignment angle.
pub fn validate_coordinates(room: &Room) -> PlanResult<()> {
    for (feature, loop_index, points) in room.iter_loops() {
        if let Some(point_index) = points.iter().position(|p| !p.is_finite()) {
            return Err(PlanError::InvalidCoordinate {
                collection: feature,
                loop_index,
                point_index,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point3;

    fn p(x: f64, z: f64) -> Point3 {
        Point3::new(x, 0.0, z)
    }

    #[test]
    fn test_clean_room_has_no_marks() {
        let room = Room {
            walls: vec![vec![p(0.0, 0.0), p(1.0, 0.0)]],
            floors: vec![vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]],
            ..Room::default()
        };
        assert!(inspect_room(&room).is_empty());
        assert!(validate_room(&room).is_ok());
    }

    #[test]
    fn test_no_walls_is_info_only() {
        let room = Room {
            openings: vec![vec![p(0.0, 0.0), p(1.0, 1.0)]],
            ..Room::default()
        };
        let diags = inspect_room(&room);
        assert_eq!(diags.of_kind(NO_WALLS).count(), 1);
        assert!(!diags.has_errors());
    }

    #[test]
    fn test_short_reference_wall_is_error() {
        let room = Room {
            walls: vec![vec![p(0.0, 0.0)], vec![p(0.0, 0.0), p(1.0, 0.0)]],
            ..Room::default()
        };
        let diags = inspect_room(&room);
        assert_eq!(diags.of_kind(SHORT_REFERENCE_WALL).count(), 1);
        assert_eq!(diags.of_kind(SINGLE_POINT_LOOP).count(), 0);
        assert!(matches!(validate_room(&room), Err(PlanError::InvalidGeometry(_))));

        // The longest-wall strategy skips the short wall
        assert!(validate_room_with(&room, ReferenceWall::Longest).is_ok());
    }

    #[test]
    fn test_room_of_empty_loops_is_not_an_error() {
        let room = Room {
            walls: vec![vec![]],
            floors: vec![vec![]],
            ..Room::default()
        };
        let diags = inspect_room(&room);
        assert_eq!(diags.of_kind(SHORT_REFERENCE_WALL).count(), 0);
        assert_eq!(diags.of_kind(EMPTY_LOOP).count(), 1);
        assert!(validate_room(&room).is_ok());
    }

    #[test]
    fn test_non_finite_coordinate_located() {
        let room = Room {
            walls: vec![vec![p(0.0, 0.0), p(1.0, 0.0)]],
            windows: vec![vec![], vec![p(0.0, 0.0), Point3::new(1.0, f64::NAN, 0.0)]],
            ..Room::default()
        };
        let diags = inspect_room(&room);
        assert_eq!(diags.of_kind(EMPTY_LOOP).count(), 1);

        assert_eq!(
            validate_room(&room),
            Err(PlanError::InvalidCoordinate {
                collection: Feature::Windows,
                loop_index: 1,
                point_index: 1,
            })
        );
    }

    #[test]
    fn test_validate_coordinates_ignores_walls() {
        let room = Room {
            walls: vec![vec![p(0.0, 0.0)]],
            ..Room::default()
        };
        assert!(validate_coordinates(&room).is_ok());

        let room = Room {
            objects: vec![vec![Point3::new(0.0, 0.0, f64::NEG_INFINITY)]],
            ..Room::default()
        };
        assert!(matches!(
            validate_coordinates(&room),
            Err(PlanError::InvalidCoordinate { collection: Feature::Objects, .. })
        ));
    }

    #[test]
    fn test_zero_length_reference_wall_warns() {
        let room = Room {
            walls: vec![vec![p(2.0, 2.0), p(2.0, 2.0)]],
            ..Room::default()
        };
        let diags = inspect_room(&room);
        assert_eq!(diags.of_kind(ZERO_LENGTH_REFERENCE_WALL).count(), 1);
        assert!(!diags.has_errors());
    }
}
