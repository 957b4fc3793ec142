//! Prereq CLI binary.

use anyhow::Result;
use prereq::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the prereq CLI.
fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=prereq=debug cargo run -- plan courses.txt
    //
    // Logs go to stderr so `--json` output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("prereq=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting prereq CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Prereq CLI completed successfully");
    Ok(())
}
