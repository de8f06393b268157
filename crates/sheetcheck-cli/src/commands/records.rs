//! Records command - list every classified cell.

use std::path::PathBuf;

use colored::Colorize;

use crate::cli::LoadArgs;

pub fn run(
    file: PathBuf,
    sheet: Option<String>,
    load: LoadArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = super::load(&file, &load)?;

    if let Some(ref name) = sheet {
        if result.workbook.sheet(name).is_none() {
            return Err(format!("Sheet not found: {}", name).into());
        }
    }

    let selected = result
        .workbook
        .sheets
        .iter()
        .filter(|(name, _)| sheet.as_deref().is_none_or(|s| s == name.as_str()));

    for (name, sheet_result) in selected {
        println!("{}", format!("Sheet: {}", name).yellow().bold());
        for record in &sheet_result.records {
            let expected = sheet_result.majority(record.column);
            let type_label = if expected.is_some_and(|t| t != record.inferred_type) {
                record.inferred_type.label().red()
            } else {
                record.inferred_type.label().normal()
            };

            println!(
                "  {:>6}  {:20} {:8} {}",
                record.row,
                record.title,
                type_label,
                record.value
            );
        }
        println!();
    }

    Ok(())
}
