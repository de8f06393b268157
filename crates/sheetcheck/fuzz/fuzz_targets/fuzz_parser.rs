//! Fuzz target for the loaders.
//!
//! This fuzzer tests that loading:
//! 1. Never panics on malformed delimited text
//! 2. Never panics on malformed spreadsheet containers
//! 3. Doesn't allocate unbounded memory

#![no_main]

use libfuzzer_sys::fuzz_target;
use sheetcheck::{SourceFormat, WorkbookLoader};
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let loader = WorkbookLoader::new();
    for (name, format) in [
        ("fuzz.csv", SourceFormat::Csv),
        ("fuzz.tsv", SourceFormat::Tsv),
        ("fuzz.xlsx", SourceFormat::Xlsx),
        ("fuzz.xls", SourceFormat::Xls),
    ] {
        let _ = loader.load_bytes(Path::new(name), data, format);
    }
});
