//! Delimited text reader with delimiter detection.
//!
//! A CSV/TSV file is read as a workbook with a single sheet: the first record
//! is the header row and every later record is a data row.

use crate::error::{Result, SheetcheckError};
use super::source::{RawSheet, SourceFormat};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = by format, auto-detected for CSV).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
    /// Maximum data rows to read (None = all).
    pub max_rows: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
            max_rows: None,
        }
    }
}

/// Parses delimited text into a raw sheet.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse file contents into a sheet named `name`.
    pub fn parse_bytes(&self, name: &str, bytes: &[u8], format: SourceFormat) -> Result<RawSheet> {
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(RawSheet::new(name, None, Vec::new()));
        }

        let delimiter = match (self.config.delimiter, format) {
            (Some(d), _) => d,
            (None, SourceFormat::Tsv) => b'\t',
            (None, _) => detect_delimiter(bytes, self.config.quote)?,
        };
        self.check_delimiter(delimiter)?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut records = reader.records();

        // Blank lines never reach us as records, so every record is a row
        // that is present, even when all of its fields are empty.
        let header = match records.next() {
            Some(record) => Some(record_cells(&record?)),
            None => None,
        };

        let mut rows = Vec::new();
        for (row_idx, result) in records.enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            rows.push(Some(record_cells(&record)));
        }

        tracing::debug!(
            sheet = name,
            delimiter = %(delimiter as char).escape_default(),
            rows = rows.len(),
            "parsed delimited text"
        );

        Ok(RawSheet::new(name, header, rows))
    }

    fn check_delimiter(&self, delimiter: u8) -> Result<()> {
        if !delimiter.is_ascii() || matches!(delimiter, b'\n' | b'\r') || delimiter == self.config.quote {
            return Err(SheetcheckError::InvalidDelimiter(format!(
                "{:?}",
                delimiter as char
            )));
        }
        Ok(())
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

fn record_cells(record: &csv::StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

/// Lines sampled for delimiter detection.
const SAMPLE_LINES: usize = 10;

/// Pick the delimiter that gives every sampled line the header's field
/// count, preferring the one that splits the header into more fields.
///
/// Candidates absent from the header are never chosen. Without any
/// candidate the input is treated as a single comma-separated column.
fn detect_delimiter(bytes: &[u8], quote: u8) -> Result<u8> {
    let text = String::from_utf8_lossy(bytes);
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();

    let Some(header) = lines.first() else {
        return Err(SheetcheckError::InvalidDelimiter(
            "no lines to analyze".to_string(),
        ));
    };

    // (every line matches the header, separators in the header, delimiter)
    let mut best: Option<(bool, usize, u8)> = None;

    for &delim in DELIMITERS {
        let separators = count_delimiter_in_line(header, delim, quote);
        if separators == 0 {
            continue;
        }

        let uniform = lines
            .iter()
            .all(|line| count_delimiter_in_line(line, delim, quote) == separators);

        // Strict comparison keeps the earlier candidate on ties, so tab wins.
        if best.is_none_or(|(u, n, _)| (uniform, separators) > (u, n)) {
            best = Some((uniform, separators, delim));
        }
    }

    Ok(best.map_or(b',', |(_, _, delim)| delim))
}

/// Count delimiter occurrences outside quoted fields.
fn count_delimiter_in_line(line: &str, delimiter: u8, quote: u8) -> usize {
    let mut in_quotes = false;

    line.bytes()
        .filter(|&b| {
            if b == quote {
                in_quotes = !in_quotes;
            }
            b == delimiter && !in_quotes
        })
        .count()
}
