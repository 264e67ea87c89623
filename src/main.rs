//! CLI entry point for the text map to binary level converter

use clap::Parser;
use levelpack::io::cli::{Cli, ConversionJob};
use levelpack::io::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    match ConversionJob::new(cli).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
