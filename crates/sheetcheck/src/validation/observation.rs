//! Findings produced while checking a workbook.

use serde::{Deserialize, Serialize};

use crate::schema::ScalarType;

/// Kind of issue a check can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// File extension is not a supported format.
    UnsupportedFormat,
    /// A sheet has no header row.
    NoHeaderRow,
    /// A data row is absent.
    EmptyDataRow,
    /// A cell's type differs from its column's majority type.
    ColumnTypeMismatch,
}

impl IssueKind {
    /// Get a human-readable label for the issue kind.
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::UnsupportedFormat => "Unsupported Format",
            IssueKind::NoHeaderRow => "No Header Row",
            IssueKind::EmptyDataRow => "Empty Data Row",
            IssueKind::ColumnTypeMismatch => "Column Type Mismatch",
        }
    }

    /// How serious the issue is for the run.
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::UnsupportedFormat => Severity::Error,
            IssueKind::NoHeaderRow => Severity::Warning,
            IssueKind::EmptyDataRow => Severity::Info,
            IssueKind::ColumnTypeMismatch => Severity::Info,
        }
    }
}

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational only, processing continued unchanged.
    Info,
    /// Part of the input was skipped.
    Warning,
    /// Processing of the file was aborted.
    Error,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

/// A cell whose inferred type disagrees with its column's majority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMismatch {
    /// Zero-based column position of the checked column.
    pub column: usize,
    /// Title of the checked column.
    pub title: String,
    /// Row number of the offending cell (same numbering as `CellRecord::row`).
    pub row: usize,
    /// Majority type of the column.
    pub expected: ScalarType,
    /// Type inferred for the cell.
    pub actual: ScalarType,
    /// Raw cell text.
    pub value: String,
}

impl TypeMismatch {
    pub fn kind(&self) -> IssueKind {
        IssueKind::ColumnTypeMismatch
    }
}

/// Non-fatal condition recorded while scanning a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SheetWarning {
    /// The data row has no row object and was skipped.
    EmptyDataRow { row: usize },
}

impl SheetWarning {
    pub fn kind(&self) -> IssueKind {
        match self {
            SheetWarning::EmptyDataRow { .. } => IssueKind::EmptyDataRow,
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> String {
        match self {
            SheetWarning::EmptyDataRow { row } => format!("Row {} contains no data", row),
        }
    }
}

/// A sheet excluded from the workbook result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSheet {
    /// Sheet name.
    pub name: String,
    /// Why the sheet was skipped.
    pub reason: IssueKind,
}
