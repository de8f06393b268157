//! Per-sheet classification, voting and mismatch detection.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SheetcheckError};
use crate::inference::{CellClassifier, ColumnTypeTally};
use crate::input::RawSheet;
use crate::schema::{CellRecord, ColumnHeader, ScalarType};
use crate::validation::{SheetWarning, TypeMismatch};

/// Data row `i` sits on physical row `i + 1`; reported numbers add one more,
/// so the first data row is row 2.
const ROW_NUMBER_OFFSET: usize = 2;

/// Result of checking one sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetResult {
    /// Sheet name.
    pub sheet_name: String,
    /// Active columns in header order.
    pub columns: Vec<ColumnHeader>,
    /// Classified cells in row-major order.
    pub records: Vec<CellRecord>,
    /// Type counts per column.
    pub tally: ColumnTypeTally,
    /// Majority type per column position.
    pub majority_type_by_column: IndexMap<usize, ScalarType>,
    /// Cells disagreeing with their column's majority, in scan order.
    pub mismatches: Vec<TypeMismatch>,
    /// Non-fatal conditions met while scanning.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<SheetWarning>,
}

impl SheetResult {
    /// Active column at a position.
    pub fn column(&self, position: usize) -> Option<&ColumnHeader> {
        self.columns.iter().find(|c| c.position == position)
    }

    /// Majority type of the column at a position.
    pub fn majority(&self, position: usize) -> Option<ScalarType> {
        self.majority_type_by_column.get(&position).copied()
    }

    /// Records whose column title matches.
    pub fn records_for<'a>(&'a self, title: &'a str) -> impl Iterator<Item = &'a CellRecord> + 'a {
        self.records.iter().filter(move |r| r.title == title)
    }

    /// Number of rows skipped because they were absent.
    pub fn empty_rows(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, SheetWarning::EmptyDataRow { .. }))
            .count()
    }
}

/// Runs classification and voting over the rows of a sheet.
#[derive(Debug, Clone, Default)]
pub struct SheetProcessor {
    classifier: CellClassifier,
}

impl SheetProcessor {
    /// Create a processor with the default classifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with a custom classifier.
    pub fn with_classifier(classifier: CellClassifier) -> Self {
        Self { classifier }
    }

    /// Process a raw sheet.
    pub fn process(&self, sheet: &RawSheet) -> Result<SheetResult> {
        self.process_sheet(&sheet.name, sheet.header.as_deref(), &sheet.rows)
    }

    /// Process a header row and its data rows.
    ///
    /// Fails with [`SheetcheckError::NoHeaderRow`] when the header is absent or
    /// has no non-blank cell.
    pub fn process_sheet(
        &self,
        name: &str,
        header: Option<&[String]>,
        rows: &[Option<Vec<String>>],
    ) -> Result<SheetResult> {
        let columns = header.map(ColumnHeader::parse_row).unwrap_or_default();
        if columns.is_empty() {
            return Err(SheetcheckError::NoHeaderRow {
                sheet: name.to_string(),
            });
        }

        for column in columns.iter().filter(|c| c.is_array) {
            tracing::debug!(sheet = name, title = %column.title, "array column detected");
        }

        let mut records = Vec::new();
        let mut tally = ColumnTypeTally::new();
        let mut warnings = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            let row_number = index + ROW_NUMBER_OFFSET;

            let Some(cells) = row else {
                tracing::warn!(sheet = name, row = row_number, "row contains no data");
                warnings.push(SheetWarning::EmptyDataRow { row: row_number });
                continue;
            };

            for column in &columns {
                // Short rows read missing trailing cells as empty text.
                let value = cells.get(column.position).map(String::as_str).unwrap_or("");
                let inferred_type = self.classifier.classify(value, column.is_array);
                tally.record(column.position, inferred_type);

                tracing::trace!(
                    sheet = name,
                    row = row_number,
                    title = %column.title,
                    inferred = %inferred_type,
                    value,
                    "classified cell"
                );

                records.push(CellRecord {
                    title: column.title.clone(),
                    is_array: column.is_array,
                    column: column.position,
                    row: row_number,
                    value: value.to_string(),
                    inferred_type,
                });
            }
        }

        let mut majority_type_by_column = IndexMap::new();
        let mut mismatches = Vec::new();

        for column in &columns {
            let Some(expected) = tally.majority(column.position) else {
                continue;
            };

            tracing::debug!(
                sheet = name,
                column = column.position + 1,
                title = %column.title,
                majority = %expected,
                "majority type"
            );
            majority_type_by_column.insert(column.position, expected);

            // Matched by title, so columns sharing a title are checked together.
            for record in records.iter().filter(|r| r.title == column.title) {
                if record.inferred_type == expected {
                    continue;
                }

                tracing::debug!(
                    sheet = name,
                    column = column.position + 1,
                    row = record.row,
                    expected = %expected,
                    found = %record.inferred_type,
                    "type mismatch"
                );

                mismatches.push(TypeMismatch {
                    column: column.position,
                    title: column.title.clone(),
                    row: record.row,
                    expected,
                    actual: record.inferred_type,
                    value: record.value.clone(),
                });
            }
        }

        Ok(SheetResult {
            sheet_name: name.to_string(),
            columns,
            records,
            tally,
            majority_type_by_column,
            mismatches,
            warnings,
        })
    }
}
