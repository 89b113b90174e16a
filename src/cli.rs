//! CLI argument parsing and dispatch

use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;
use clap_complete::Shell;
use log::LevelFilter;

use crate::commands;
use ugo::config::RunConfig;
use ugo::defaults::DEFAULT_SEARCH_PATH_VAR;
use ugo::runner::ExecStrategy;

/// ugo - Run a command inside a GOPATH-style workspace for the current project
///
/// Flags must come before COMMAND; everything after it is passed to the
/// command unchanged.
#[derive(Parser, Debug)]
#[command(name = "ugo")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Replace the existing search path instead of appending to it
    #[arg(short, long)]
    replace: bool,

    /// Search-path variable to point at the workspace
    #[arg(
        long = "var",
        value_name = "NAME",
        env = "UGO_SEARCH_PATH_VAR",
        default_value = DEFAULT_SEARCH_PATH_VAR
    )]
    search_path_var: String,

    /// Run the command through a shell and relay its combined output
    /// instead of replacing the ugo process
    #[arg(long)]
    capture: bool,

    /// Accept the first detected package without prompting when no
    /// .gopackage file exists
    #[arg(short, long)]
    yes: bool,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", env = "UGO_LOG", default_value = "warn")]
    log_level: LevelFilter,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum, conflicts_with = "command")]
    completions: Option<Shell>,

    /// The command to execute, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        required_unless_present = "completions",
        num_args = 1..,
        trailing_var_arg = true
    )]
    command: Vec<OsString>,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::new()
            .filter_level(self.log_level)
            .format_timestamp(None)
            .init();

        if let Some(shell) = self.completions {
            return commands::completions::execute(shell);
        }

        let config = self.into_run_config();
        commands::run::execute(&config)
    }

    fn into_run_config(self) -> RunConfig {
        let mut command = self.command.into_iter();
        let program = command.next().unwrap_or_default();

        RunConfig {
            replace: self.replace,
            search_path_var: self.search_path_var,
            strategy: if self.capture {
                ExecStrategy::Capture
            } else {
                ExecStrategy::Replace
            },
            assume_yes: self.yes,
            program,
            args: command.collect(),
        }
    }
}
