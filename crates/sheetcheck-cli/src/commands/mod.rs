//! CLI command implementations.

pub mod check;
pub mod records;
pub mod schema;

use std::path::Path;

use sheetcheck::{CheckResult, Sheetcheck};

use crate::cli::LoadArgs;

/// Load and check a file with the options shared by every command.
pub(crate) fn load(file: &Path, load: &LoadArgs) -> Result<CheckResult, Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let config = load.to_config()?;
    tracing::debug!(?config, file = %file.display(), "checking file");
    Ok(Sheetcheck::with_config(config).check(file)?)
}
