//! Room geometry model
//!
//! A `Room` is the aggregate of one scanned room's boundary geometry. Each
//! feature collection is an ordered list of point loops in scan order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::point::{Point3, PointLoop};
use super::serde_helpers::null_as_default;

/// The feature collections a room carries
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Walls,
    Floors,
    Doors,
    Windows,
    Openings,
    Objects,
}

impl Feature {
    /// Every collection, in declaration order
    pub const ALL: [Feature; 6] = [
        Feature::Walls,
        Feature::Floors,
        Feature::Doors,
        Feature::Windows,
        Feature::Openings,
        Feature::Objects,
    ];

    /// Collections that contribute to the plan's view box
    ///
    /// Objects are furniture outlines and never widen the plan.
    pub const PLAN: [Feature; 5] = [
        Feature::Walls,
        Feature::Floors,
        Feature::Doors,
        Feature::Windows,
        Feature::Openings,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feature::Walls => "walls",
            Feature::Floors => "floors",
            Feature::Doors => "doors",
            Feature::Windows => "windows",
            Feature::Openings => "openings",
            Feature::Objects => "objects",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Loop counts per collection, in `Feature::ALL` order
///
/// Used as a structural fingerprint to match a processed sub-room back to the
/// room it was captured as.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CollectionCounts(pub [usize; 6]);

/// One scanned room
///
/// Absent or `null` collections deserialize as empty lists.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Room {
    #[serde(default, deserialize_with = "null_as_default")]
    pub walls: Vec<PointLoop>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub floors: Vec<PointLoop>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub doors: Vec<PointLoop>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub windows: Vec<PointLoop>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub openings: Vec<PointLoop>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub objects: Vec<PointLoop>,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the loops of one collection
    pub fn loops(&self, feature: Feature) -> &[PointLoop] {
        match feature {
            Feature::Walls => &self.walls,
            Feature::Floors => &self.floors,
            Feature::Doors => &self.doors,
            Feature::Windows => &self.windows,
            Feature::Openings => &self.openings,
            Feature::Objects => &self.objects,
        }
    }

    fn loops_mut(&mut self, feature: Feature) -> &mut Vec<PointLoop> {
        match feature {
            Feature::Walls => &mut self.walls,
            Feature::Floors => &mut self.floors,
            Feature::Doors => &mut self.doors,
            Feature::Windows => &mut self.windows,
            Feature::Openings => &mut self.openings,
            Feature::Objects => &mut self.objects,
        }
    }

    /// Iterate every loop with its collection and index
    pub fn iter_loops(&self) -> impl Iterator<Item = (Feature, usize, &PointLoop)> + '_ {
        Feature::ALL.into_iter().flat_map(move |feature| {
            self.loops(feature)
                .iter()
                .enumerate()
                .map(move |(idx, points)| (feature, idx, points))
        })
    }

    /// Total number of points across all collections
    pub fn point_count(&self) -> usize {
        self.iter_loops().map(|(_, _, points)| points.len()).sum()
    }

    /// True when no collection holds a single point
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Points that define the plan's extent (everything except objects)
    pub fn plan_points(&self) -> impl Iterator<Item = &Point3> + '_ {
        Feature::PLAN
            .into_iter()
            .flat_map(move |feature| self.loops(feature).iter().flatten())
    }

    pub fn collection_counts(&self) -> CollectionCounts {
        CollectionCounts(Feature::ALL.map(|feature| self.loops(feature).len()))
    }

    /// Build a new room with `f` applied to every point of every collection
    ///
    /// Loop counts and per-loop point counts are unchanged.
    pub fn map_points<F>(&self, f: F) -> Room
    where
        F: Fn(&Point3) -> Point3,
    {
        let mut mapped = Room::new();
        for feature in Feature::ALL {
            *mapped.loops_mut(feature) = self
                .loops(feature)
                .iter()
                .map(|points| points.iter().map(&f).collect())
                .collect();
        }
        mapped
    }
}
