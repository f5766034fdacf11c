//! Serde helpers for tolerant deserialization of capture documents

use serde::{Deserialize, Deserializer};

/// Deserialize a field that may be `null` as its type's default value
///
/// The capture pipeline writes `null` for feature collections a room does not
/// have (no windows, no openings). Combined with `#[serde(default)]` this
/// turns both a missing field and an explicit `null` into an empty collection.
pub fn null_as_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
