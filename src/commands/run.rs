//! # Run
//!
//! Runs the user's command inside the project workspace:
//!
//! 1. Find `.gopackage` from the current directory upwards, or create it from
//!    a git remote (asking on the terminal, or taking the first with `--yes`).
//! 2. Recreate `.workspace/src/<identity>` as a symlink to the project.
//! 3. Point the search-path variable at `.workspace` and `PWD` at the link.
//! 4. Start the command from the link, replacing this process unless
//!    `--capture` was given.

use anyhow::{Context, Result};
use std::env;

use ugo::config::RunConfig;
use ugo::environment::Environment;
use ugo::launch;
use ugo::prompt::{AcceptFirst, CandidatePrompt, TerminalPrompt};
use ugo::runner;

/// Execute a configured run.
pub fn execute(config: &RunConfig) -> Result<()> {
    let start = env::current_dir().context("cannot determine the current directory")?;

    let mut prompt: Box<dyn CandidatePrompt> = if config.assume_yes {
        Box::new(AcceptFirst)
    } else {
        Box::new(TerminalPrompt::new())
    };

    let spec = launch::prepare(config, &start, Environment::capture(), prompt.as_mut())?;
    runner::run(&spec, config.strategy)?;
    Ok(())
}
