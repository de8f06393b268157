//! Per-cell classification records.

use serde::{Deserialize, Serialize};

use super::types::ScalarType;

/// One classified cell of an active column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    /// Column title with array markers stripped.
    pub title: String,
    /// Whether the column is an array column.
    pub is_array: bool,
    /// Zero-based column position.
    pub column: usize,
    /// Physical row number plus one; the first data row is row 2.
    pub row: usize,
    /// Raw cell text as read from the sheet.
    pub value: String,
    /// Type inferred for this cell alone.
    pub inferred_type: ScalarType,
}
