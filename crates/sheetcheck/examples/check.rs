//! Example: Check column types of a workbook with sheetcheck.
//!
//! Usage:
//!   cargo run --example check -- <file_path>
//!
//! Example:
//!   cargo run --example check -- inventory.xlsx

use std::env;
use std::path::Path;

use sheetcheck::Sheetcheck;

fn main() -> sheetcheck::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example check -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example check -- inventory.xlsx");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Sheetcheck: {}", file_path);
    println!("{}", separator);
    println!();

    let result = Sheetcheck::new().check(path)?;

    println!("## Source");
    println!("  File: {}", result.source.file);
    println!("  Format: {}", result.source.format);
    println!("  Sheets: {}", result.source.sheet_count);
    println!("  Hash: {}", result.source.hash);
    println!();

    for (name, sheet) in &result.workbook.sheets {
        println!("## Sheet '{}' ({} columns)", name, sheet.columns.len());
        println!();

        for column in &sheet.columns {
            let majority = sheet
                .majority(column.position)
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:>3} {:20} {:8} array={}",
                column.position + 1,
                column.title,
                majority,
                column.is_array
            );
        }
        println!();

        if !sheet.mismatches.is_empty() {
            println!("### Mismatches ({}):", sheet.mismatches.len());
            for mismatch in &sheet.mismatches {
                println!(
                    "  column {} row {}: expected {}, found {} ('{}')",
                    mismatch.column + 1,
                    mismatch.row,
                    mismatch.expected,
                    mismatch.actual,
                    mismatch.value
                );
            }
            println!();
        }

        for warning in &sheet.warnings {
            println!("  [{}] {}", warning.kind().label(), warning.description());
        }
    }

    for skipped in &result.workbook.skipped {
        println!("Skipped sheet '{}': {}", skipped.name, skipped.reason.label());
    }

    println!("## Summary");
    println!(
        "  Consistency: {:.1}%",
        result.summary.consistency_score * 100.0
    );
    println!("  Mismatches: {}", result.summary.total_mismatches);
    println!("  Recommendation: {}", result.summary.recommendation);
    println!();

    println!("{}", separator);

    Ok(())
}
