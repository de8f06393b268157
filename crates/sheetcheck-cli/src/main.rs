//! Sheetcheck CLI - column type consistency checks for workbooks.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            file,
            json,
            output,
            load,
        } => commands::check::run(file, json, output, load, cli.verbose),

        Commands::Schema { file, json, load } => commands::schema::run(file, json, load),

        Commands::Records { file, sheet, load } => commands::records::run(file, sheet, load),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
