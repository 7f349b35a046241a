//! CSV output projection.

use serde::Serialize;

/// A listing projected onto the output schema.
///
/// Field order is the column order of the output file and must not change
/// within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub employer: String,
    /// Comma-joined flattened location names
    pub location: String,
}

impl OutputRow {
    /// Header row, matching the field order above.
    pub const HEADERS: [&'static str; 5] = ["id", "title", "description", "employer", "location"];
}
