//! FDD Checker - field dry density by the sand replacement method
//!
//! A CLI tool that turns test pit measurements into dry density and
//! relative compaction, and checks them against the required percentage.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use tracing::Level;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
