//! # ugo CLI
//!
//! This is the binary entry point for the `ugo` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Handing the resulting configuration to the library and reporting errors.
//!
//! The workspace logic lives in the `ugo` library crate; the binary is a thin
//! wrapper around it. Any error ends the process with exit code 1.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
