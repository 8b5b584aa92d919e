//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive location input
//! - Logging setup and exit-code mapping

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();
    info!("Starting weather application");

    let cmd = cli::Cli::parse();
    cmd.run().await
}

/// Diagnostics go to stderr so stdout stays reserved for the weather report.
/// `RUST_LOG` overrides the default error-only filter.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
