//! Running the user's command inside the workspace.
//!
//! Two strategies are available:
//!
//! - [`ExecStrategy::Replace`] (default) replaces the current process image
//!   with the command on Unix. Stdio is inherited, so interactive programs,
//!   colors and signals behave as if the command had been started directly,
//!   and the exit status is the command's own.
//! - [`ExecStrategy::Capture`] runs the command through `sh -c`, captures
//!   stdout and stderr as one stream, relays it to stdout once the command
//!   finishes and turns any non-zero status into [`Error::CommandFailed`].

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use crate::defaults::PATH_VAR;
use crate::environment::Environment;
use crate::error::{Error, Result};

/// How the command is started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecStrategy {
    #[default]
    Replace,
    Capture,
}

/// Everything needed to start the command.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub env: Environment,
    pub cwd: PathBuf,
}

impl CommandSpec {
    fn display_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Find the executable using the child's `PATH`, relative to its working directory.
    pub fn resolve_program(&self) -> Result<PathBuf> {
        which::which_in(&self.program, self.env.get(PATH_VAR), &self.cwd).map_err(|e| {
            Error::CommandNotFound {
                command: self.display_name(),
                message: e.to_string(),
            }
        })
    }

    fn command(&self, program: &Path) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(&self.args)
            .env_clear()
            .envs(self.env.iter())
            .current_dir(&self.cwd);
        cmd
    }
}

/// Run `spec` with `strategy`.
///
/// With [`ExecStrategy::Replace`] on Unix this only returns on failure.
pub fn run(spec: &CommandSpec, strategy: ExecStrategy) -> Result<()> {
    let program = spec.resolve_program()?;
    debug!(
        "running {} in {} ({:?})",
        program.display(),
        spec.cwd.display(),
        strategy
    );

    match strategy {
        ExecStrategy::Replace => run_replace(spec, &program),
        ExecStrategy::Capture => run_captured(spec, &program),
    }
}

#[cfg(unix)]
fn run_replace(spec: &CommandSpec, program: &Path) -> Result<()> {
    use std::os::unix::process::CommandExt;

    let source = spec.command(program).arg0(&spec.program).exec();
    Err(Error::Exec {
        command: spec.display_name(),
        source,
    })
}

#[cfg(not(unix))]
fn run_replace(spec: &CommandSpec, program: &Path) -> Result<()> {
    let status = spec.command(program).status().map_err(|source| Error::Exec {
        command: spec.display_name(),
        source,
    })?;
    match status.code() {
        Some(0) => Ok(()),
        Some(code) => std::process::exit(code),
        None => Err(Error::CommandFailed {
            command: spec.display_name(),
            code: None,
        }),
    }
}

fn run_captured(spec: &CommandSpec, program: &Path) -> Result<()> {
    // "$0" is the resolved program, "$@" its arguments; 2>&1 merges the streams.
    let mut shell = Command::new("sh");
    shell
        .arg("-c")
        .arg("exec \"$0\" \"$@\" 2>&1")
        .arg(program)
        .args(&spec.args)
        .env_clear()
        .envs(spec.env.iter())
        .current_dir(&spec.cwd)
        .stdin(Stdio::inherit());

    let output = shell.output().map_err(|source| Error::Exec {
        command: spec.display_name(),
        source,
    })?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output.stdout)?;
    stdout.flush()?;
    io::stderr().write_all(&output.stderr)?;

    if output.status.success() {
        Ok(())
    } else {
        Err(Error::CommandFailed {
            command: spec.display_name(),
            code: output.status.code(),
        })
    }
}
