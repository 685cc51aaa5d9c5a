//! eda CLI - exploratory summaries and data-quality checks.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Overview { file, sep, json } => {
            commands::overview::run(file, sep, json, cli.verbose)
        }
        Commands::Report(args) => commands::report::run(args, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
