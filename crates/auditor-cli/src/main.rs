//! Data auditor CLI
//!
//! Stands in for the external tool-calling transport: each data command
//! builds the configured store, registers the three data tools, executes
//! one tool call, and prints the payload. The `seed` command populates
//! the local SQLite file with synthetic company data.

mod args;
mod commands;

use clap::Parser;

pub use args::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    commands::route(cli).await
}
