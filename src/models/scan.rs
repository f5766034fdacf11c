//! Whole-scan documents
//!
//! A multi-room capture produces one merged room plus the individual
//! sub-rooms, both as processed and as originally captured.

use serde::{Deserialize, Serialize};

use super::room::Room;
use super::serde_helpers::null_as_default;

/// The capture pipeline's merged scan
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// All rooms merged into one geometry
    pub entire_room: Room,

    /// Sub-rooms after merging
    #[serde(default, deserialize_with = "null_as_default")]
    pub rooms: Vec<Room>,

    /// Sub-rooms as originally captured; parallel to the caller's room names
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_rooms: Vec<Room>,
}

impl ScanResult {
    /// Resolve a display name for each processed sub-room
    ///
    /// Sub-rooms are matched to originals by their per-collection loop counts;
    /// the first original with the same counts lends its name. Unmatched
    /// rooms (or originals without a name) get an empty string.
    pub fn sub_room_names(&self, original_names: &[String]) -> Vec<String> {
        let original_keys: Vec<_> = self
            .original_rooms
            .iter()
            .map(Room::collection_counts)
            .collect();

        self.rooms
            .iter()
            .map(|room| {
                let key = room.collection_counts();
                original_keys
                    .iter()
                    .position(|original| *original == key)
                    .and_then(|idx| original_names.get(idx))
                    .cloned()
                    .unwrap_or_default()
            })
            .collect()
    }
}
