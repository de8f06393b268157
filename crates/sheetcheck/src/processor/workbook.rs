//! Workbook-level processing: one sheet result per sheet name.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::SheetcheckError;
use crate::input::RawSheet;
use crate::validation::{IssueKind, SkippedSheet};
use super::sheet::{SheetProcessor, SheetResult};

/// Results for every processed sheet of a workbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbookResult {
    /// Sheet results keyed by sheet name, in first-seen order.
    pub sheets: IndexMap<String, SheetResult>,
    /// Sheets excluded from `sheets`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedSheet>,
}

impl WorkbookResult {
    /// Result for a sheet by name.
    pub fn sheet(&self, name: &str) -> Option<&SheetResult> {
        self.sheets.get(name)
    }

    /// Number of processed sheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Whether no sheet was processed.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// Runs the sheet processor over every sheet of a workbook.
#[derive(Debug, Clone, Default)]
pub struct WorkbookProcessor {
    sheet_processor: SheetProcessor,
}

impl WorkbookProcessor {
    /// Create a workbook processor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workbook processor around a configured sheet processor.
    pub fn with_sheet_processor(sheet_processor: SheetProcessor) -> Self {
        Self { sheet_processor }
    }

    /// Process sheets in order.
    ///
    /// Sheets without a header row are skipped and listed in
    /// [`WorkbookResult::skipped`]. A later sheet with an already-seen name
    /// replaces the earlier result.
    pub fn process_workbook(&self, sheets: &[RawSheet]) -> WorkbookResult {
        let mut result = WorkbookResult::default();

        for sheet in sheets {
            match self.sheet_processor.process(sheet) {
                Ok(sheet_result) => {
                    if let Some(previous) = result.sheets.insert(sheet.name.clone(), sheet_result) {
                        tracing::debug!(
                            sheet = %sheet.name,
                            replaced_records = previous.records.len(),
                            "duplicate sheet name, keeping the later sheet"
                        );
                    }
                }
                Err(SheetcheckError::NoHeaderRow { sheet: name }) => {
                    tracing::warn!(sheet = %name, "sheet has no header row, skipping");
                    result.skipped.push(SkippedSheet {
                        name,
                        reason: IssueKind::NoHeaderRow,
                    });
                }
                Err(e) => {
                    tracing::error!(sheet = %sheet.name, error = %e, "sheet failed, skipping");
                }
            }
        }

        result
    }
}
