//! Workbook loading for spreadsheet and delimited files.

use std::fmt::Display;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Range, Reader, Xls, Xlsx};
use sha2::{Digest, Sha256};

use crate::error::{Result, SheetcheckError};
use super::parser::{Parser, ParserConfig};
use super::source::{RawSheet, SourceFormat, SourceMetadata};

/// Loads every sheet of a file as raw cell text.
#[derive(Debug, Clone, Default)]
pub struct WorkbookLoader {
    parser: Parser,
}

impl WorkbookLoader {
    /// Create a loader with default parser configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with a custom delimited-text configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            parser: Parser::with_config(config),
        }
    }

    /// Load a file, selecting the reader by extension.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Vec<RawSheet>, SourceMetadata)> {
        let path = path.as_ref();
        let format = SourceFormat::from_path(path)?;

        let bytes = fs::read(path).map_err(|e| SheetcheckError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let sheets = self.load_bytes(path, &bytes, format)?;

        tracing::info!(
            file = %path.display(),
            format = %format,
            sheets = sheets.len(),
            "loaded workbook"
        );

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            bytes.len() as u64,
            format,
            sheets.len(),
        );

        Ok((sheets, metadata))
    }

    /// Read sheets from in-memory file contents.
    ///
    /// `source` names the file for error messages and, for delimited text,
    /// provides the sheet name (its file stem).
    pub fn load_bytes(&self, source: &Path, bytes: &[u8], format: SourceFormat) -> Result<Vec<RawSheet>> {
        match format {
            SourceFormat::Xls => {
                let mut workbook: Xls<_> =
                    Xls::new(Cursor::new(bytes)).map_err(|e| workbook_error(source, e))?;
                read_sheets(&mut workbook).map_err(|e| workbook_error(source, e))
            }
            SourceFormat::Xlsx => {
                let mut workbook: Xlsx<_> =
                    Xlsx::new(Cursor::new(bytes)).map_err(|e| workbook_error(source, e))?;
                read_sheets(&mut workbook).map_err(|e| workbook_error(source, e))
            }
            SourceFormat::Csv | SourceFormat::Tsv => {
                let name = source
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "Sheet1".to_string());
                Ok(vec![self.parser.parse_bytes(&name, bytes, format)?])
            }
        }
    }
}

fn workbook_error(source: &Path, err: impl Display) -> SheetcheckError {
    SheetcheckError::Workbook {
        path: source.to_path_buf(),
        message: err.to_string(),
    }
}

/// Read all sheets in workbook order.
fn read_sheets<'a, R>(workbook: &mut R) -> std::result::Result<Vec<RawSheet>, R::Error>
where
    R: Reader<Cursor<&'a [u8]>>,
{
    let names = workbook.sheet_names();
    let mut sheets = Vec::with_capacity(names.len());

    for name in names {
        let range = workbook.worksheet_range(&name)?;
        sheets.push(sheet_from_range(&name, &range));
    }

    Ok(sheets)
}

/// Re-anchor a used range at physical cell (0,0) and split off the header.
fn sheet_from_range(name: &str, range: &Range<Data>) -> RawSheet {
    let Some((start_row, start_col)) = range.start() else {
        return RawSheet::new(name, None, Vec::new());
    };

    let mut physical: Vec<Option<Vec<String>>> = vec![None; start_row as usize];
    physical.extend(range.rows().map(|cells| row_text(cells, start_col as usize)));

    tracing::debug!(
        sheet = name,
        rows = physical.len(),
        columns = range.width() + start_col as usize,
        "read sheet range"
    );

    let mut physical = physical.into_iter();
    let header = physical.next().flatten();
    RawSheet::new(name, header, physical.collect())
}

/// Cell text of a row, or `None` if every cell is empty.
///
/// A used range stores rows with no cell values as all-empty rows, so calamine
/// cannot tell them apart from rows whose cells were cleared. Both are absent.
fn row_text(cells: &[Data], leading_columns: usize) -> Option<Vec<String>> {
    if cells.iter().all(|cell| matches!(cell, Data::Empty)) {
        return None;
    }

    let mut text = vec![String::new(); leading_columns];
    text.extend(cells.iter().map(|cell| cell.to_string()));
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_row_text_empty_row_is_absent() {
        let cells = vec![Data::Empty, Data::Empty];
        assert!(row_text(&cells, 0).is_none());
    }

    #[test]
    fn test_row_text_renders_cells() {
        let cells = vec![
            Data::String("abc".to_string()),
            Data::Float(10.0),
            Data::Float(2.5),
            Data::Bool(true),
            Data::Empty,
        ];
        assert_eq!(
            row_text(&cells, 1).unwrap(),
            vec!["", "abc", "10", "2.5", "true", ""]
        );
    }

    #[test]
    fn test_sheet_from_range_reanchors_rows() {
        let mut range: Range<Data> = Range::new((1, 0), (3, 1));
        range.set_value((1, 0), Data::String("id".to_string()));
        range.set_value((1, 1), Data::String("name".to_string()));
        range.set_value((3, 0), Data::Float(1.0));
        range.set_value((3, 1), Data::String("a".to_string()));

        let sheet = sheet_from_range("Data", &range);

        // Physical row 0 is blank, so the header is missing.
        assert!(sheet.header.is_none());
        assert_eq!(sheet.rows.len(), 3);
        assert_eq!(sheet.rows[0], Some(vec!["id".to_string(), "name".to_string()]));
        assert!(sheet.rows[1].is_none());
        assert_eq!(sheet.rows[2], Some(vec!["1".to_string(), "a".to_string()]));
    }

    #[test]
    fn test_sheet_from_empty_range() {
        let range: Range<Data> = Range::empty();
        let sheet = sheet_from_range("Empty", &range);
        assert!(sheet.header.is_none());
        assert!(sheet.rows.is_empty());
    }

    #[test]
    fn test_load_csv_file() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"id,score\n1,2.5\n2,3.5\n").unwrap();

        let loader = WorkbookLoader::new();
        let (sheets, metadata) = loader.load(file.path()).unwrap();

        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].row_count(), 2);
        assert_eq!(metadata.format, SourceFormat::Csv);
        assert_eq!(metadata.sheet_count, 1);
        assert!(metadata.hash.starts_with("sha256:"));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let file = Builder::new().suffix(".ods").tempfile().unwrap();
        let err = WorkbookLoader::new().load(file.path()).unwrap_err();
        assert!(matches!(err, SheetcheckError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = WorkbookLoader::new().load("does_not_exist.xlsx").unwrap_err();
        assert!(matches!(err, SheetcheckError::Io { .. }));
    }

    #[test]
    fn test_load_xlsx_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/inventory.xlsx");
        let (sheets, metadata) = WorkbookLoader::new().load(&path).unwrap();

        assert_eq!(metadata.format, SourceFormat::Xlsx);
        let names: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Inventory", "Offset", "Empty"]);

        let inventory = &sheets[0];
        assert_eq!(
            inventory.header,
            Some(vec![
                "sku".to_string(),
                "qty".to_string(),
                "price".to_string(),
                "tags[]".to_string(),
                "active".to_string(),
            ])
        );
        assert_eq!(inventory.rows.len(), 3);
        assert_eq!(
            inventory.rows[0],
            Some(vec![
                "A1".to_string(),
                "10".to_string(),
                "2.5".to_string(),
                "1,2".to_string(),
                "true".to_string(),
            ])
        );
        assert!(inventory.rows[1].is_none());

        // The used range of "Offset" starts at B2.
        let offset = &sheets[1];
        assert!(offset.header.is_none());
        assert_eq!(offset.rows[0], Some(vec![String::new(), "id".to_string()]));
        assert_eq!(offset.rows[1], Some(vec![String::new(), "1".to_string()]));

        assert!(sheets[2].header.is_none());
        assert!(sheets[2].rows.is_empty());
    }

    #[test]
    fn test_load_corrupt_xlsx() {
        let err = WorkbookLoader::new()
            .load_bytes(Path::new("broken.xlsx"), b"not a zip archive", SourceFormat::Xlsx)
            .unwrap_err();
        assert!(matches!(err, SheetcheckError::Workbook { .. }));
    }
}
