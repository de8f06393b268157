//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use sheetcheck::{ClassifierConfig, IntWidth, ParserConfig, SheetcheckConfig};
use std::path::PathBuf;

/// Sheetcheck: column type inference and consistency checks for workbooks
#[derive(Parser)]
#[command(name = "sheetcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Infer column types and report cells that disagree with them
    Check {
        /// Path to the workbook (.xls, .xlsx, .csv, .tsv)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Also write the JSON result to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// Show the majority type and vote counts of every column
    Schema {
        /// Path to the workbook (.xls, .xlsx, .csv, .tsv)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// List every classified cell
    Records {
        /// Path to the workbook (.xls, .xlsx, .csv, .tsv)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Only list records of this sheet
        #[arg(short, long)]
        sheet: Option<String>,

        #[command(flatten)]
        load: LoadArgs,
    },
}

/// Options controlling how files are read and cells classified.
#[derive(Args, Clone, Debug)]
pub struct LoadArgs {
    /// Delimiter for CSV input (default: auto-detect)
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Integer width in bits for INT classification (32 or 64)
    #[arg(long, default_value_t = 32)]
    pub int_width: u32,

    /// Maximum data rows to read from CSV/TSV input
    #[arg(long)]
    pub max_rows: Option<usize>,
}

impl LoadArgs {
    /// Build the library configuration.
    pub fn to_config(&self) -> Result<SheetcheckConfig, String> {
        let delimiter = match self.delimiter {
            Some(c) if c.is_ascii() => Some(c as u8),
            Some(c) => return Err(format!("Delimiter must be an ASCII character, got '{}'", c)),
            None => None,
        };
        let int_width = IntWidth::from_bits(self.int_width)
            .ok_or_else(|| format!("Unknown integer width: {}. Use 32 or 64.", self.int_width))?;

        Ok(SheetcheckConfig {
            parser: ParserConfig {
                delimiter,
                max_rows: self.max_rows,
                ..ParserConfig::default()
            },
            classifier: ClassifierConfig {
                int_width,
                ..ClassifierConfig::default()
            },
        })
    }
}
