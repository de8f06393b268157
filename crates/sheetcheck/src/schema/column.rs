//! Column header definition.

use serde::{Deserialize, Serialize};

/// Marker in a header name that designates a comma-separated array column.
pub const ARRAY_MARKER: &str = "[]";

/// An active column, described by its header cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnHeader {
    /// Zero-based position in the sheet.
    pub position: usize,
    /// Header text with every array marker removed.
    pub title: String,
    /// Whether the header carried the array marker.
    pub is_array: bool,
}

impl ColumnHeader {
    /// Build a header from raw header cell text.
    ///
    /// Returns `None` for blank cells, which leave the column inactive.
    ///
    /// The title is trimmed, so `"a"`, `" a"` and `"a[] "` share the title
    /// `"a"`. Mismatch detection matches records by title, so such columns are
    /// checked against each other's majority type.
    pub fn parse(position: usize, raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        let is_array = raw.contains(ARRAY_MARKER);
        let title = if is_array {
            raw.replace(ARRAY_MARKER, "").trim().to_string()
        } else {
            raw.trim().to_string()
        };

        Some(Self {
            position,
            title,
            is_array,
        })
    }

    /// Parse every cell of a header row, skipping inactive columns.
    pub fn parse_row(header: &[String]) -> Vec<Self> {
        header
            .iter()
            .enumerate()
            .filter_map(|(position, raw)| Self::parse(position, raw))
            .collect()
    }
}
