//! Check command - infer column types and report mismatching cells.

use std::path::PathBuf;

use colored::Colorize;
use sheetcheck::{CheckResult, Severity};

use crate::cli::LoadArgs;

pub fn run(
    file: PathBuf,
    json: bool,
    output: Option<PathBuf>,
    load: LoadArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = super::load(&file, &load)?;

    if let Some(ref path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&result)?)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_report(&result, verbose);

    if let Some(path) = output {
        println!();
        println!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }

    Ok(())
}

fn print_report(result: &CheckResult, verbose: bool) {
    println!(
        "{} {} ({}, {} sheet(s))",
        "Checked".cyan().bold(),
        result.source.file.white(),
        result.source.format,
        result.source.sheet_count
    );

    for (name, sheet) in &result.workbook.sheets {
        println!();
        println!("{}", format!("Sheet: {}", name).yellow().bold());

        if verbose {
            for column in &sheet.columns {
                let majority = sheet
                    .majority(column.position)
                    .map(|t| t.label())
                    .unwrap_or("-");
                let marker = if column.is_array { "[]" } else { "" };
                println!(
                    "  {:>3}  {:20} {}",
                    column.position,
                    format!("{}{}", column.title, marker),
                    majority
                );
            }
        }

        for warning in &sheet.warnings {
            println!("  {} {}", "warning:".yellow(), warning.description());
        }

        if sheet.mismatches.is_empty() {
            println!("  {}", "All columns consistent".green());
            continue;
        }

        for mismatch in &sheet.mismatches {
            println!(
                "  {} row {}, column '{}': expected {}, found {} ({:?})",
                severity_tag(mismatch.kind().severity()),
                mismatch.row,
                mismatch.title,
                mismatch.expected.label(),
                mismatch.actual.label().red(),
                mismatch.value
            );
        }
    }

    for skipped in &result.workbook.skipped {
        println!();
        println!(
            "{} sheet '{}' skipped: {}",
            severity_tag(skipped.reason.severity()),
            skipped.name,
            skipped.reason.label()
        );
    }

    let summary = &result.summary;
    println!();
    println!(
        "Found {} mismatches in {} cells across {} column(s)",
        summary.total_mismatches.to_string().white().bold(),
        summary.total_records,
        summary.total_columns
    );
    println!("Consistency score: {:.0}%", summary.consistency_score * 100.0);

    if summary.total_mismatches == 0 && summary.skipped_sheets == 0 {
        println!("{}", summary.recommendation.green());
    } else {
        println!("{}", summary.recommendation.yellow());
    }
}

fn severity_tag(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Error => "error:".red().bold(),
        Severity::Warning => "warning:".yellow().bold(),
        Severity::Info => "info:".blue(),
    }
}
