//! # imageprep CLI
//!
//! Binary entry point for the `imageprep` command-line tool.
//!
//! Its responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Initializing logging from the global `--log-level` flag.
//! - Dispatching to the appropriate command implementation.
//!
//! The core logic lives in the `imageprep` library crate; this binary is a
//! thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
