//! Error types for the sheetcheck library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sheetcheck operations.
#[derive(Debug, Error)]
pub enum SheetcheckError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is not a recognized spreadsheet or delimited format.
    #[error("Unsupported format: {0} (expected .xls, .xlsx, .csv or .tsv)")]
    UnsupportedFormat(String),

    /// The spreadsheet container could not be opened or a sheet could not be read.
    #[error("Workbook error for '{path}': {message}")]
    Workbook { path: PathBuf, message: String },

    /// A sheet has no header row, or its header row has no named column.
    #[error("Sheet '{sheet}' has no header row")]
    NoHeaderRow { sheet: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for sheetcheck operations.
pub type Result<T> = std::result::Result<T, SheetcheckError>;
