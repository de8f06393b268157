//! Fuzz target for sheet processing.
//!
//! Builds arbitrary sheets (absent rows, short rows, array headers) and checks
//! that processing never panics and that tally totals match present rows.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sheetcheck::{RawSheet, SheetProcessor};

#[derive(Debug, Arbitrary)]
struct FuzzSheet {
    header: Option<Vec<String>>,
    rows: Vec<Option<Vec<String>>>,
}

fuzz_target!(|input: FuzzSheet| {
    if input.rows.len() > 1_000 {
        return;
    }

    let sheet = RawSheet::new("Fuzz", input.header, input.rows);
    if let Ok(result) = SheetProcessor::new().process(&sheet) {
        let present = sheet.rows.iter().filter(|r| r.is_some()).count();
        for column in &result.columns {
            assert_eq!(result.tally.total(column.position), present);
        }
    }
});
