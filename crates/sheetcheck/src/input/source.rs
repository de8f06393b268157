//! Data source abstraction and metadata.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SheetcheckError};

/// File format of a source, selected by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Legacy binary workbook (.xls).
    Xls,
    /// Zipped XML workbook (.xlsx).
    Xlsx,
    /// Comma separated text.
    Csv,
    /// Tab separated text.
    Tsv,
}

impl SourceFormat {
    /// Select the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "xls" => Ok(SourceFormat::Xls),
            "xlsx" => Ok(SourceFormat::Xlsx),
            "csv" => Ok(SourceFormat::Csv),
            "tsv" | "tab" => Ok(SourceFormat::Tsv),
            _ => Err(SheetcheckError::UnsupportedFormat(ext.to_string())),
        }
    }

    /// Select the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        Self::from_extension(ext)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Xls => write!(f, "xls"),
            SourceFormat::Xlsx => write!(f, "xlsx"),
            SourceFormat::Csv => write!(f, "csv"),
            SourceFormat::Tsv => write!(f, "tsv"),
        }
    }
}

/// Raw cell text of one sheet, as handed to the sheet processor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSheet {
    /// Sheet name.
    pub name: String,
    /// Header row (physical row 0), `None` if the row is absent.
    pub header: Option<Vec<String>>,
    /// Data rows in physical order; `None` marks an absent row.
    pub rows: Vec<Option<Vec<String>>>,
}

impl RawSheet {
    /// Create a sheet from its parts.
    pub fn new(
        name: impl Into<String>,
        header: Option<Vec<String>>,
        rows: Vec<Option<Vec<String>>>,
    ) -> Self {
        Self {
            name: name.into(),
            header,
            rows,
        }
    }

    /// Build a sheet where every row is present, from string slices.
    pub fn from_rows(name: impl Into<String>, header: &[&str], rows: &[&[&str]]) -> Self {
        Self::new(
            name,
            Some(header.iter().map(|s| s.to_string()).collect()),
            rows.iter()
                .map(|row| Some(row.iter().map(|s| s.to_string()).collect()))
                .collect(),
        )
    }

    /// Number of data rows, absent rows included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of header columns.
    pub fn column_count(&self) -> usize {
        self.header.as_ref().map(Vec::len).unwrap_or(0)
    }
}

/// Metadata about the source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format.
    pub format: SourceFormat,
    /// Number of sheets read from the file.
    pub sheet_count: usize,
    /// When the check was performed.
    pub analyzed_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: SourceFormat,
        sheet_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            sheet_count,
            analyzed_at: Utc::now(),
        }
    }
}
