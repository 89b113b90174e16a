//! Workspace materialization.
//!
//! Builds `<project>/.workspace/src/<base path>/<leaf>` as a symlink back to
//! `<project>`, so tools that resolve packages by directory layout find the
//! project under its package identity.
//!
//! The link is recreated on every run. An existing symlink at the link
//! location, dangling or not, is replaced. Anything else there is left alone
//! and reported as [`Error::WorkspaceConflict`], as is a symlink or file in
//! place of one of the directories leading to the link. Directories created
//! before a failure are not rolled back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::defaults::{WORKSPACE_DIRNAME, WORKSPACE_SRC_DIRNAME};
use crate::error::{Error, Result};
use crate::identity::PackageIdentity;
use crate::marker;

/// A materialized workspace for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    package_path: PathBuf,
}

impl Workspace {
    /// The directory to put on the search path (`<project>/.workspace`).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The symlink standing in for the project inside the workspace.
    pub fn package_path(&self) -> &Path {
        &self.package_path
    }
}

/// Materialize the workspace for the project whose marker lives in `project_dir`.
pub fn materialize_from_marker(project_dir: &Path) -> Result<Workspace> {
    let identity = marker::read_identity(project_dir)?;
    materialize(project_dir, &identity)
}

/// Materialize the workspace for `project_dir` under `identity`.
pub fn materialize(project_dir: &Path, identity: &PackageIdentity) -> Result<Workspace> {
    let project_dir = std::path::absolute(project_dir)?;
    let root = project_dir.join(WORKSPACE_DIRNAME);
    let parent = create_link_parent(
        &root,
        &Path::new(WORKSPACE_SRC_DIRNAME).join(identity.base_path()),
    )?;

    let link = parent.join(identity.leaf());
    remove_existing_link(&link)?;
    create_dir_link(&project_dir, &link)?;
    info!("linked {} -> {}", link.display(), project_dir.display());

    Ok(Workspace {
        root,
        package_path: link,
    })
}

/// Create `root` and each component of `relative` below it.
///
/// Unlike `create_dir_all`, symlinks are not followed: an old link left by a
/// shorter identity would otherwise place the new link inside the project.
fn create_link_parent(root: &Path, relative: &Path) -> Result<PathBuf> {
    let mut dir = root.to_path_buf();
    ensure_real_dir(&dir)?;
    for component in relative.components() {
        dir.push(component);
        ensure_real_dir(&dir)?;
    }
    Ok(dir)
}

fn ensure_real_dir(dir: &Path) -> Result<()> {
    match fs::symlink_metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::WorkspaceConflict {
            path: dir.to_path_buf(),
            reason: "it is not a directory",
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("creating {}", dir.display());
            fs::create_dir(dir)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn remove_existing_link(link: &Path) -> Result<()> {
    match fs::symlink_metadata(link) {
        Ok(meta) if meta.file_type().is_symlink() => {
            debug!("removing stale link {}", link.display());
            remove_dir_link(link)?;
            Ok(())
        }
        Ok(_) => Err(Error::WorkspaceConflict {
            path: link.to_path_buf(),
            reason: "it is not a symlink",
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(unix)]
fn create_dir_link(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_dir_link(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

#[cfg(unix)]
fn remove_dir_link(link: &Path) -> io::Result<()> {
    fs::remove_file(link)
}

#[cfg(windows)]
fn remove_dir_link(link: &Path) -> io::Result<()> {
    fs::remove_dir(link).or_else(|_| fs::remove_file(link))
}
