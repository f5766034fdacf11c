//! Models module for the floor-plan renderer
//!
//! This module contains the geometry data model handed over by the
//! capture pipeline: points, rooms, and whole-scan documents.

pub mod point;
pub mod room;
pub mod scan;
pub mod serde_helpers;

// Re-export commonly used types
pub use point::{Point3, PointLoop};
pub use room::{CollectionCounts, Feature, Room};
pub use scan::ScanResult;
