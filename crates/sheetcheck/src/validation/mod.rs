//! Findings reported by sheet and workbook processing.

mod observation;

pub use observation::{IssueKind, Severity, SheetWarning, SkippedSheet, TypeMismatch};
