//! # Completions
//!
//! Generates shell completion scripts with `clap_complete`.
//!
//! ```bash
//! ugo --completions bash > ~/.local/share/bash-completion/completions/ugo
//! ugo --completions zsh > ~/.zfunc/_ugo
//! ```

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Write the completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
