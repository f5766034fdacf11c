//! Diagnostics module for room geometry
//!
//! Inspects scanned geometry before it is aligned and rendered, reporting
//! problems as marks located by collection, loop and point. Marks with
//! `Error` severity block rendering; warnings and infos are advisory.

pub mod geometry;

pub use geometry::{
    inspect_room, inspect_room_with, validate_coordinates, validate_room, validate_room_with,
};

use serde::{Deserialize, Serialize};

use crate::models::Feature;

/// Severity level for diagnostic marks
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// A diagnostic mark pointing at one loop (and optionally one point) of a room
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticMark {
    /// Collection the loop belongs to
    pub collection: Feature,
    /// Loop index within the collection
    pub loop_index: usize,
    /// Point index within the loop, when the issue is a single point
    pub point_index: Option<usize>,
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "non_finite_coordinate", "empty_loop")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl DiagnosticMark {
    /// Create a new diagnostic mark
    pub fn new(
        collection: Feature,
        loop_index: usize,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            collection,
            loop_index,
            point_index: None,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Narrow the mark to a single point
    pub fn at_point(mut self, point_index: usize) -> Self {
        self.point_index = Some(point_index);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

/// Collection of diagnostic marks for one room
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Diagnostics {
    /// All diagnostic marks
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    /// Create empty diagnostics
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    /// Add a mark
    pub fn add(&mut self, mark: DiagnosticMark) {
        self.marks.push(mark);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.marks.iter().any(DiagnosticMark::is_error)
    }

    /// First error-severity mark, in report order
    pub fn first_error(&self) -> Option<&DiagnosticMark> {
        self.marks.iter().find(|m| m.is_error())
    }

    /// Marks of one kind
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a DiagnosticMark> + 'a {
        self.marks.iter().filter(move |m| m.kind == kind)
    }

    /// Check if there are any diagnostics
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_mark_creation() {
        let mark = DiagnosticMark::new(
            Feature::Doors,
            2,
            DiagnosticSeverity::Error,
            "test_error",
            "Test error message",
        )
        .at_point(5);

        assert_eq!(mark.collection, Feature::Doors);
        assert_eq!(mark.loop_index, 2);
        assert_eq!(mark.point_index, Some(5));
        assert_eq!(mark.severity, DiagnosticSeverity::Error);
        assert_eq!(mark.kind, "test_error");
    }

    #[test]
    fn test_diagnostics_has_errors() {
        let mut diags = Diagnostics::new();
        assert!(!diags.has_errors());
        assert!(diags.first_error().is_none());

        diags.add(DiagnosticMark::new(
            Feature::Walls,
            0,
            DiagnosticSeverity::Warning,
            "warn",
            "Warning",
        ));
        assert!(!diags.has_errors());

        diags.add(DiagnosticMark::new(
            Feature::Floors,
            1,
            DiagnosticSeverity::Error,
            "err",
            "Error",
        ));
        assert!(diags.has_errors());
        assert_eq!(diags.first_error().map(|m| m.kind.as_str()), Some("err"));
    }

    #[test]
    fn test_mark_serializes_camel_case() {
        let mark = DiagnosticMark::new(Feature::Windows, 3, DiagnosticSeverity::Info, "k", "m");
        let json = serde_json::to_value(&mark).unwrap();
        assert_eq!(json["collection"], "windows");
        assert_eq!(json["loopIndex"], 3);
        assert_eq!(json["severity"], "info");
        assert!(json["pointIndex"].is_null());
    }
}
