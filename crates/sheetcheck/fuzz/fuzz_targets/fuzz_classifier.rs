//! Fuzz target for cell classification.
//!
//! This fuzzer tests that the classifier:
//! 1. Never panics on any cell text, array or not
//! 2. Agrees with itself on repeated calls

#![no_main]

use libfuzzer_sys::fuzz_target;
use sheetcheck::classify;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    if let Ok(cell) = std::str::from_utf8(data) {
        let scalar = classify(cell, false);
        let array = classify(cell, true);

        assert_eq!(scalar, classify(cell, false));
        if !cell.contains(',') {
            assert_eq!(scalar, array);
        }
    }
});
