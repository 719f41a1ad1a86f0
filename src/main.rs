// file: src/main.rs
// version: 1.0.0
// guid: bf05ecaa-d15a-4114-be63-670b334d5a52

//! raspi-share-setup - Main entry point

use clap::Parser;
use raspi_share_setup::{
    cli::{setup_command, Cli},
    logging::logger,
};
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("error running raspi-share-setup: {}", e);
        return ExitCode::FAILURE;
    }

    match setup_command(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error running raspi-share-setup: {}", e);
            ExitCode::FAILURE
        }
    }
}
