//! Error types for plan generation
//!
//! An empty room is not an error: it renders as an empty document. Errors
//! cover geometry the aligner cannot work with and coordinates that would
//! corrupt the output.

use thiserror::Error;

use crate::models::Feature;

/// Top-level error type for alignment and rendering
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Geometry that cannot be aligned (e.g. a reference wall with one point)
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// NaN or Infinity in an input coordinate
    #[error("Non-finite coordinate in {collection}[{loop_index}][{point_index}]")]
    InvalidCoordinate {
        collection: Feature,
        loop_index: usize,
        point_index: usize,
    },

    /// Input from JavaScript/JSON did not match the room schema
    #[error("Malformed input: {0}")]
    Deserialize(String),
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        PlanError::Deserialize(err.to_string())
    }
}

/// Result alias used across the crate
pub type PlanResult<T> = Result<T, PlanError>;
