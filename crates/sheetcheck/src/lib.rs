//! Sheetcheck: column type inference and consistency checking for workbooks.
//!
//! Every sheet's first row names the columns; each later row is a record. For
//! each column, sheetcheck classifies every cell as one of a few scalar types,
//! elects the column's type by majority vote and reports the cells that
//! disagree with it. A header ending in `[]` marks a column of comma-separated
//! arrays.
//!
//! # Core Principles
//!
//! - **Pure core**: sheets go in as raw cell text, results come out as values
//! - **Never fails on content**: unparseable cells are simply `String`
//! - **Deterministic**: record, mismatch and tie-break order follow row order
//!
//! # Example
//!
//! ```no_run
//! use sheetcheck::Sheetcheck;
//!
//! let sheetcheck = Sheetcheck::new();
//! let result = sheetcheck.check("inventory.xlsx").unwrap();
//!
//! for (name, sheet) in &result.workbook.sheets {
//!     println!("{}: {} mismatches", name, sheet.mismatches.len());
//! }
//! ```
//!
//! Sheets already in memory skip the loader:
//!
//! ```
//! use sheetcheck::{RawSheet, ScalarType, Sheetcheck};
//!
//! let sheet = RawSheet::from_rows("Sheet1", &["age"], &[&["10"], &["20"], &["abc"]]);
//! let workbook = Sheetcheck::new().check_sheets(&[sheet]);
//!
//! let result = workbook.sheet("Sheet1").unwrap();
//! assert_eq!(result.majority(0), Some(ScalarType::Int));
//! assert_eq!(result.mismatches[0].row, 4);
//! ```

pub mod error;
pub mod input;
pub mod inference;
pub mod processor;
pub mod schema;
pub mod validation;

mod sheetcheck;

pub use crate::sheetcheck::{CheckResult, CheckSummary, Sheetcheck, SheetcheckConfig, compute_summary};
pub use error::{Result, SheetcheckError};
pub use inference::{CellClassifier, ClassifierConfig, ColumnTypeTally, IntWidth, classify, vote};
pub use input::{ParserConfig, RawSheet, SourceFormat, SourceMetadata, WorkbookLoader};
pub use processor::{SheetProcessor, SheetResult, WorkbookProcessor, WorkbookResult};
pub use schema::{CellRecord, ColumnHeader, ScalarType};
pub use validation::{IssueKind, Severity, SheetWarning, SkippedSheet, TypeMismatch};
