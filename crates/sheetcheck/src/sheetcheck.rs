//! Main Sheetcheck struct and public API.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::inference::{CellClassifier, ClassifierConfig};
use crate::input::{ParserConfig, RawSheet, SourceMetadata, WorkbookLoader};
use crate::processor::{SheetProcessor, WorkbookProcessor, WorkbookResult};
use crate::validation::IssueKind;

/// Configuration for a check run.
#[derive(Debug, Clone, Default)]
pub struct SheetcheckConfig {
    /// Delimited text configuration.
    pub parser: ParserConfig,
    /// Cell classification configuration.
    pub classifier: ClassifierConfig,
}

/// Result of checking a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Per-sheet results.
    pub workbook: WorkbookResult,
    /// Summary statistics.
    pub summary: CheckSummary,
}

/// Summary of the check results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSummary {
    /// Sheets read from the file.
    pub total_sheets: usize,
    /// Sheets with a result.
    pub processed_sheets: usize,
    /// Sheets skipped for lack of a header row.
    pub skipped_sheets: usize,
    /// Active columns across processed sheets.
    pub total_columns: usize,
    /// Classified cells across processed sheets.
    pub total_records: usize,
    /// Type mismatches across processed sheets.
    pub total_mismatches: usize,
    /// Absent data rows across processed sheets.
    pub empty_rows: usize,
    /// Issue counts by kind.
    pub issues_by_kind: IndexMap<IssueKind, usize>,
    /// Share of records agreeing with their own column's majority (0.0-1.0).
    pub consistency_score: f64,
    /// Human-readable recommendation.
    pub recommendation: String,
}

/// Loads workbooks and checks column type consistency.
pub struct Sheetcheck {
    loader: WorkbookLoader,
    processor: WorkbookProcessor,
}

impl Sheetcheck {
    /// Create a Sheetcheck instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(SheetcheckConfig::default())
    }

    /// Create a Sheetcheck instance with custom configuration.
    pub fn with_config(config: SheetcheckConfig) -> Self {
        let classifier = CellClassifier::with_config(config.classifier);
        let processor =
            WorkbookProcessor::with_sheet_processor(SheetProcessor::with_classifier(classifier));

        Self {
            loader: WorkbookLoader::with_config(config.parser),
            processor,
        }
    }

    /// Load a file and check every sheet.
    pub fn check(&self, path: impl AsRef<Path>) -> Result<CheckResult> {
        let (sheets, source) = self.loader.load(path)?;
        let workbook = self.check_sheets(&sheets);
        let summary = compute_summary(sheets.len(), &workbook);

        Ok(CheckResult {
            source,
            workbook,
            summary,
        })
    }

    /// Check sheets that are already in memory.
    pub fn check_sheets(&self, sheets: &[RawSheet]) -> WorkbookResult {
        self.processor.process_workbook(sheets)
    }
}

impl Default for Sheetcheck {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute summary statistics from a workbook result.
pub fn compute_summary(total_sheets: usize, workbook: &WorkbookResult) -> CheckSummary {
    let sheets = workbook.sheets.values();

    let total_columns = sheets.clone().map(|s| s.columns.len()).sum();
    let total_records = sheets.clone().map(|s| s.records.len()).sum();
    let total_mismatches = sheets.clone().map(|s| s.mismatches.len()).sum();
    let empty_rows = sheets.map(|s| s.empty_rows()).sum();
    let skipped_sheets = workbook.skipped.len();

    let mut issues_by_kind = IndexMap::new();
    for skipped in &workbook.skipped {
        *issues_by_kind.entry(skipped.reason).or_insert(0) += 1;
    }
    if empty_rows > 0 {
        issues_by_kind.insert(IssueKind::EmptyDataRow, empty_rows);
    }
    if total_mismatches > 0 {
        issues_by_kind.insert(IssueKind::ColumnTypeMismatch, total_mismatches);
    }

    // Columns sharing a title report each other's cells too, so mismatches
    // can outnumber records. Score each record against its own column only.
    let disagreeing: usize = workbook
        .sheets
        .values()
        .map(|s| {
            s.records
                .iter()
                .filter(|r| s.majority(r.column).is_some_and(|m| m != r.inferred_type))
                .count()
        })
        .sum();

    let consistency_score = if total_records == 0 {
        1.0
    } else {
        1.0 - disagreeing as f64 / total_records as f64
    };

    let recommendation =
        generate_recommendation(skipped_sheets, total_mismatches, consistency_score);

    CheckSummary {
        total_sheets,
        processed_sheets: workbook.sheets.len(),
        skipped_sheets,
        total_columns,
        total_records,
        total_mismatches,
        empty_rows,
        issues_by_kind,
        consistency_score,
        recommendation,
    }
}

/// Generate a recommendation based on the check.
fn generate_recommendation(
    skipped_sheets: usize,
    total_mismatches: usize,
    consistency_score: f64,
) -> String {
    if skipped_sheets > 0 {
        format!(
            "Add a header row to {} skipped sheet(s) so their columns can be checked.",
            skipped_sheets
        )
    } else if total_mismatches == 0 {
        "Every column has a consistent type.".to_string()
    } else if consistency_score >= 0.95 {
        format!(
            "Review {} cell(s) that disagree with their column type.",
            total_mismatches
        )
    } else {
        format!(
            "Column types are inconsistent ({:.0}% of cells agree). Review {} mismatches.",
            consistency_score * 100.0,
            total_mismatches
        )
    }
}
