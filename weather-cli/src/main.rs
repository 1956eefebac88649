//! Binary crate for the `weather-now` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive search loop
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
