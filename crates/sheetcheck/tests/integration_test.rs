//! Integration tests for sheetcheck.

use std::io::Write;
use tempfile::{Builder, NamedTempFile};

use sheetcheck::{
    IssueKind, RawSheet, ScalarType, SheetWarning, Sheetcheck, SheetcheckConfig, SheetcheckError,
    SourceFormat,
};

/// Helper to create a temporary file with given content and extension.
fn create_test_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn row(cells: &[&str]) -> Option<Vec<String>> {
    Some(cells.iter().map(|s| s.to_string()).collect())
}

// =============================================================================
// File Checks
// =============================================================================

#[test]
fn test_check_csv_file() {
    let content = "id,name,score,active\n\
                   1,Alice,9.5,true\n\
                   2,Bob,8.25,false\n\
                   3,Carol,n/a,true\n";
    let file = create_test_file(content, ".csv");

    let result = Sheetcheck::new().check(file.path()).expect("Check failed");

    assert_eq!(result.source.format, SourceFormat::Csv);
    assert_eq!(result.source.sheet_count, 1);
    assert_eq!(result.workbook.len(), 1);

    let (name, sheet) = result.workbook.sheets.first().unwrap();
    assert_eq!(*name, file.path().file_stem().unwrap().to_string_lossy());
    assert_eq!(sheet.majority(0), Some(ScalarType::Int));
    assert_eq!(sheet.majority(1), Some(ScalarType::String));
    assert_eq!(sheet.majority(2), Some(ScalarType::Float));
    assert_eq!(sheet.majority(3), Some(ScalarType::Bool));

    assert_eq!(sheet.mismatches.len(), 1);
    assert_eq!(sheet.mismatches[0].title, "score");
    assert_eq!(sheet.mismatches[0].row, 4);
    assert_eq!(sheet.mismatches[0].value, "n/a");
}

#[test]
fn test_check_tsv_with_array_column() {
    let content = "sku\tsizes[]\n\
                   A1\t\"1,2,3\"\n\
                   A2\t4\n\
                   A3\t\"5,6,x\"\n";
    let file = create_test_file(content, ".tsv");

    let result = Sheetcheck::new().check(file.path()).expect("Check failed");
    let sheet = result.workbook.sheets.values().next().unwrap();

    let sizes: Vec<_> = sheet.records_for("sizes").collect();
    assert_eq!(sizes.len(), 3);
    assert!(sizes.iter().all(|r| r.is_array));
    assert_eq!(sizes[0].inferred_type, ScalarType::Int);
    assert_eq!(sizes[1].inferred_type, ScalarType::Int);
    assert_eq!(sizes[2].inferred_type, ScalarType::String);

    assert_eq!(sheet.majority(1), Some(ScalarType::Int));
    assert_eq!(sheet.mismatches.len(), 1);
    assert_eq!(sheet.mismatches[0].row, 4);
}

#[test]
fn test_check_semicolon_csv() {
    let content = "price;qty\n1.5;2\n2.5;3\n";
    let file = create_test_file(content, ".csv");

    let result = Sheetcheck::new().check(file.path()).expect("Check failed");
    let sheet = result.workbook.sheets.values().next().unwrap();

    assert_eq!(sheet.columns.len(), 2);
    assert_eq!(sheet.majority(0), Some(ScalarType::Float));
    assert_eq!(sheet.majority(1), Some(ScalarType::Int));
}

#[test]
fn test_csv_record_of_empty_fields_is_classified() {
    let file = create_test_file("a,b\n1,2\n,\n3,4\n", ".csv");

    let result = Sheetcheck::new().check(file.path()).expect("Check failed");
    let sheet = result.workbook.sheets.values().next().unwrap();

    assert_eq!(sheet.records.len(), 6);
    assert!(sheet.warnings.is_empty());
    assert_eq!(sheet.tally.total(0), 3);
    assert_eq!(sheet.majority(0), Some(ScalarType::Int));

    let rows: Vec<(usize, ScalarType)> = sheet.mismatches.iter().map(|m| (m.row, m.actual)).collect();
    assert_eq!(rows, vec![(3, ScalarType::String), (3, ScalarType::String)]);
}

#[test]
fn test_check_empty_csv_skips_sheet() {
    let file = create_test_file("", ".csv");

    let result = Sheetcheck::new().check(file.path()).expect("Check failed");

    assert!(result.workbook.is_empty());
    assert_eq!(result.summary.skipped_sheets, 1);
    assert_eq!(result.workbook.skipped[0].reason, IssueKind::NoHeaderRow);
}

#[test]
fn test_unsupported_format_is_fatal() {
    let file = create_test_file("a,b\n1,2\n", ".txt");

    let err = Sheetcheck::new().check(file.path()).unwrap_err();
    assert!(matches!(err, SheetcheckError::UnsupportedFormat(ref ext) if ext == "txt"));
}

#[test]
fn test_int_width_config() {
    let content = "big\n3000000000\n4000000000\n5\n";
    let file = create_test_file(content, ".csv");

    let narrow = Sheetcheck::new().check(file.path()).expect("Check failed");
    let sheet = narrow.workbook.sheets.values().next().unwrap();
    assert_eq!(sheet.majority(0), Some(ScalarType::Float));

    let mut config = SheetcheckConfig::default();
    config.classifier.int_width = sheetcheck::IntWidth::Bits64;
    let wide = Sheetcheck::with_config(config).check(file.path()).expect("Check failed");
    let sheet = wide.workbook.sheets.values().next().unwrap();
    assert_eq!(sheet.majority(0), Some(ScalarType::Int));
    assert!(sheet.mismatches.is_empty());
}

#[test]
fn test_result_serializes_to_json() {
    let file = create_test_file("a,b[]\n1,\"1,2\"\nx,3\n", ".csv");

    let result = Sheetcheck::new().check(file.path()).expect("Check failed");
    let json = serde_json::to_value(&result).expect("Serialization failed");

    let sheet = json["workbook"]["sheets"].as_object().unwrap().values().next().unwrap();
    assert_eq!(sheet["records"][1]["title"], "b");
    assert_eq!(sheet["records"][1]["is_array"], true);
    assert_eq!(sheet["majority_type_by_column"]["1"], "int");
    assert!(json["source"]["hash"].as_str().unwrap().starts_with("sha256:"));
}

#[test]
fn test_check_xlsx_fixture() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/inventory.xlsx");

    let result = Sheetcheck::new().check(path).expect("Check failed");

    assert_eq!(result.source.format, SourceFormat::Xlsx);
    assert_eq!(result.source.sheet_count, 3);

    let names: Vec<&str> = result.workbook.sheets.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Inventory"]);

    let skipped: Vec<&str> = result.workbook.skipped.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(skipped, vec!["Offset", "Empty"]);

    let sheet = result.workbook.sheet("Inventory").unwrap();
    let titles: Vec<&str> = sheet.columns.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["sku", "qty", "price", "tags", "active"]);
    assert!(sheet.columns[3].is_array);

    assert_eq!(sheet.majority(0), Some(ScalarType::String));
    assert_eq!(sheet.majority(1), Some(ScalarType::Int));
    assert_eq!(sheet.majority(2), Some(ScalarType::Float));
    assert_eq!(sheet.majority(3), Some(ScalarType::Int));
    assert_eq!(sheet.majority(4), Some(ScalarType::Bool));

    // Row 3 has no cells in the file.
    assert_eq!(sheet.warnings, vec![SheetWarning::EmptyDataRow { row: 3 }]);

    let values: Vec<&str> = sheet.records.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["A1", "10", "2.5", "1,2", "true", "A2", "n/a", "3.25", "3", "false"]
    );

    assert_eq!(sheet.mismatches.len(), 1);
    assert_eq!(sheet.mismatches[0].title, "qty");
    assert_eq!(sheet.mismatches[0].row, 4);
}

// =============================================================================
// In-Memory Workbooks
// =============================================================================

#[test]
fn test_missing_header_sheet_does_not_affect_others() {
    let sheets = vec![
        RawSheet::from_rows("Sheet1", &["age"], &[&["10"], &["20"], &["abc"]]),
        RawSheet::new("Sheet2", None, vec![row(&["1", "2"])]),
        RawSheet::from_rows("Sheet3", &["flag"], &[&["true"], &["FALSE"]]),
    ];

    let workbook = Sheetcheck::new().check_sheets(&sheets);

    assert!(workbook.sheet("Sheet2").is_none());

    let sheet1 = workbook.sheet("Sheet1").unwrap();
    assert_eq!(sheet1.majority(0), Some(ScalarType::Int));
    assert_eq!(sheet1.mismatches.len(), 1);
    assert_eq!(sheet1.mismatches[0].row, 4);

    let sheet3 = workbook.sheet("Sheet3").unwrap();
    assert_eq!(sheet3.majority(0), Some(ScalarType::Bool));
    assert!(sheet3.mismatches.is_empty());
}

#[test]
fn test_absent_row_in_ten_row_sheet() {
    let mut rows: Vec<Option<Vec<String>>> = (1..=10)
        .map(|i| row(&[&i.to_string(), "x"]))
        .collect();
    rows[4] = None;

    let sheet = RawSheet::new("Rows", row(&["n", "label"]), rows);
    let workbook = Sheetcheck::new().check_sheets(&[sheet]);
    let result = workbook.sheet("Rows").unwrap();

    assert_eq!(result.records.len(), 18);
    assert_eq!(result.tally.total(0), 9);
    assert_eq!(result.tally.total(1), 9);
    assert_eq!(result.warnings, vec![SheetWarning::EmptyDataRow { row: 6 }]);

    let mut rows_seen: Vec<usize> = result.records.iter().map(|r| r.row).collect();
    rows_seen.dedup();
    assert_eq!(rows_seen, vec![2, 3, 4, 5, 7, 8, 9, 10, 11]);
}

#[test]
fn test_array_hard_override_pins_string() {
    let sheet = RawSheet::from_rows(
        "Arrays",
        &["tags[]"],
        &[&["1,2,x"], &["x,1,2"], &["1.5,2"], &["true,false"]],
    );
    let workbook = Sheetcheck::new().check_sheets(&[sheet]);
    let result = workbook.sheet("Arrays").unwrap();

    let types: Vec<ScalarType> = result.records.iter().map(|r| r.inferred_type).collect();
    assert_eq!(
        types,
        vec![
            ScalarType::String,
            ScalarType::String,
            ScalarType::Float,
            ScalarType::Bool,
        ]
    );
    assert!(result.records.iter().all(|r| r.title == "tags" && r.is_array));
    assert_eq!(result.majority(0), Some(ScalarType::String));
}

#[test]
fn test_mixed_numeric_widths_vote_by_frequency() {
    let sheet = RawSheet::from_rows(
        "Numbers",
        &["value"],
        &[&["1.5"], &["2"], &["3"], &["1e39"], &["4"]],
    );
    let workbook = Sheetcheck::new().check_sheets(&[sheet]);
    let result = workbook.sheet("Numbers").unwrap();

    assert_eq!(result.majority(0), Some(ScalarType::Int));
    let actual: Vec<ScalarType> = result.mismatches.iter().map(|m| m.actual).collect();
    assert_eq!(actual, vec![ScalarType::Float, ScalarType::Double]);
}
