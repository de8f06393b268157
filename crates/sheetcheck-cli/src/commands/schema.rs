//! Schema command - show the elected type and vote counts of every column.

use std::path::PathBuf;

use colored::Colorize;
use indexmap::IndexMap;
use serde::Serialize;
use sheetcheck::{ScalarType, SheetResult};

use crate::cli::LoadArgs;

#[derive(Serialize)]
struct ColumnSchema<'a> {
    position: usize,
    title: &'a str,
    is_array: bool,
    majority: Option<ScalarType>,
    votes: IndexMap<ScalarType, usize>,
}

pub fn run(file: PathBuf, json: bool, load: LoadArgs) -> Result<(), Box<dyn std::error::Error>> {
    let result = super::load(&file, &load)?;

    if json {
        let schema: IndexMap<&str, Vec<ColumnSchema<'_>>> = result
            .workbook
            .sheets
            .iter()
            .map(|(name, sheet)| (name.as_str(), column_schemas(sheet)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    for (name, sheet) in &result.workbook.sheets {
        println!("{}", format!("Sheet: {}", name).yellow().bold());
        println!(
            "  {:>3}  {:20} {:8} {}",
            "#".dimmed(),
            "Column".dimmed(),
            "Type".dimmed(),
            "Votes".dimmed()
        );

        for column in column_schemas(sheet) {
            let title = if column.is_array {
                format!("{}[]", column.title)
            } else {
                column.title.to_string()
            };
            let majority = column.majority.map(|t| t.label()).unwrap_or("-");
            let votes = column
                .votes
                .iter()
                .map(|(t, n)| format!("{}={}", t.label(), n))
                .collect::<Vec<_>>()
                .join(" ");

            println!(
                "  {:>3}  {:20} {:8} {}",
                column.position,
                title,
                majority.cyan(),
                votes
            );
        }
        println!();
    }

    for skipped in &result.workbook.skipped {
        println!(
            "{} sheet '{}' skipped: {}",
            "warning:".yellow().bold(),
            skipped.name,
            skipped.reason.label()
        );
    }

    Ok(())
}

fn column_schemas(sheet: &SheetResult) -> Vec<ColumnSchema<'_>> {
    sheet
        .columns
        .iter()
        .map(|column| ColumnSchema {
            position: column.position,
            title: &column.title,
            is_array: column.is_array,
            majority: sheet.majority(column.position),
            votes: sheet
                .tally
                .counts(column.position)
                .cloned()
                .unwrap_or_default(),
        })
        .collect()
}
