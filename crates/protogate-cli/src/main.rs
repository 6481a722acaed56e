//! Protogate CLI
//!
//! Protocol coverage, manifests, scorecards, and artifact gates.

use std::process::ExitCode;

use clap::Parser;
use protogate_cli::{Cli, EXIT_ERROR, logging, run};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::debug!(command = ?cli.command, "Starting protogate");

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
