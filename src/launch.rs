//! Preparing a command launch.
//!
//! Ties the steps together: find or create the marker, materialize the
//! workspace, adapt the environment, and describe the command to run.

use std::path::Path;

use log::info;

use crate::config::RunConfig;
use crate::defaults::PWD_VAR;
use crate::environment::Environment;
use crate::error::Result;
use crate::marker;
use crate::prompt::CandidatePrompt;
use crate::runner::CommandSpec;
use crate::workspace;

/// Build the [`CommandSpec`] for `config`, starting the marker search at `start`.
///
/// `env` is the environment to adapt, normally [`Environment::capture`].
pub fn prepare<P>(
    config: &RunConfig,
    start: &Path,
    mut env: Environment,
    prompt: &mut P,
) -> Result<CommandSpec>
where
    P: CandidatePrompt + ?Sized,
{
    let project_dir = marker::locate_or_resolve(start, prompt)?;
    let workspace = workspace::materialize_from_marker(&project_dir)?;
    info!(
        "project {} uses workspace {}",
        project_dir.display(),
        workspace.root().display()
    );

    env.adapt_search_path(
        &config.search_path_var,
        workspace.root(),
        config.search_path_mode(),
    )?;
    env.set(PWD_VAR, workspace.package_path());

    Ok(CommandSpec {
        program: config.program.clone(),
        args: config.args.clone(),
        env,
        cwd: workspace.package_path().to_path_buf(),
    })
}
