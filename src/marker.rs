//! # Marker File Discovery
//!
//! The marker file (`.gopackage`) marks a project root and stores its package
//! identity. This module finds it, reads it, and, when it is missing,
//! synthesizes one from the git remotes of the enclosing repositories.
//!
//! ## Resolution
//!
//! 1. [`locate`] walks from the starting directory to the filesystem root and
//!    returns the first directory holding a marker file.
//! 2. If none exists, [`discover_candidates`] walks the same directories and
//!    translates every git remote URL into a [`Candidate`]. When two
//!    directories yield the same identity, the one closer to the root wins.
//! 3. [`resolve`] offers the candidates to a [`CandidatePrompt`] in identity
//!    order and writes the marker for the first accepted one.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::defaults::MARKER_FILENAME;
use crate::error::{Error, Result};
use crate::git;
use crate::identity::PackageIdentity;
use crate::path::{find_ancestor, walk_up};
use crate::prompt::CandidatePrompt;

/// A package identity that could be written into `dir`'s marker file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub identity: PackageIdentity,
    pub dir: PathBuf,
}

impl Candidate {
    /// Where the marker file would be written.
    pub fn marker_path(&self) -> PathBuf {
        self.dir.join(MARKER_FILENAME)
    }
}

/// Find the closest directory, from `start` upwards, that holds a marker file.
pub fn locate(start: &Path) -> Result<PathBuf> {
    find_ancestor(start, |dir| {
        debug!("looking for {} in {}", MARKER_FILENAME, dir.display());
        dir.join(MARKER_FILENAME).is_file()
    })
    .ok_or_else(|| Error::MarkerNotFound {
        marker: MARKER_FILENAME.to_string(),
        start: start.to_path_buf(),
    })
}

/// Read the package identity stored in `dir`'s marker file.
pub fn read_identity(dir: &Path) -> Result<PackageIdentity> {
    let content = fs::read_to_string(dir.join(MARKER_FILENAME))?;
    PackageIdentity::parse(&content.replace(['\r', '\n'], ""))
}

/// Write `identity` into `dir`'s marker file, without a trailing newline.
pub fn write_identity(dir: &Path, identity: &PackageIdentity) -> Result<PathBuf> {
    let path = dir.join(MARKER_FILENAME);
    fs::write(&path, identity.as_str())?;
    info!("created {} with content {}", path.display(), identity);
    Ok(path)
}

/// Collect candidate identities from git remotes of `start` and its ancestors.
///
/// Directories without git metadata are skipped silently. Unreadable git
/// configs and untranslatable URLs are logged and skipped.
pub fn discover_candidates(start: &Path) -> Vec<Candidate> {
    let mut found: BTreeMap<PackageIdentity, PathBuf> = BTreeMap::new();

    for dir in walk_up(start) {
        let Some(config) = git::config_path(dir) else {
            continue;
        };
        let remotes = match git::read_remotes(&config) {
            Ok(remotes) => remotes,
            Err(e) => {
                warn!("skipping {}: {}", dir.display(), e);
                continue;
            }
        };
        for remote in remotes {
            match PackageIdentity::from_remote_url(&remote.url) {
                Ok(identity) => {
                    debug!(
                        "remote {} in {} -> {}",
                        remote.name,
                        dir.display(),
                        identity
                    );
                    found.insert(identity, dir.to_path_buf());
                }
                Err(e) => warn!("skipping remote {}: {}", remote.name, e),
            }
        }
    }

    found
        .into_iter()
        .map(|(identity, dir)| Candidate { identity, dir })
        .collect()
}

/// Create a marker file from discovered git remotes and return its directory.
pub fn resolve<P>(start: &Path, prompt: &mut P) -> Result<PathBuf>
where
    P: CandidatePrompt + ?Sized,
{
    let candidates = discover_candidates(start);
    if candidates.is_empty() {
        return Err(Error::NoCandidates {
            marker: MARKER_FILENAME.to_string(),
            hint: Some(format!(
                "add a git remote or create {} manually with the package path",
                MARKER_FILENAME
            )),
        });
    }

    for candidate in &candidates {
        if prompt.accept(candidate)? {
            write_identity(&candidate.dir, &candidate.identity)?;
            return Ok(candidate.dir.clone());
        }
    }

    Err(Error::NoSelection {
        marker: MARKER_FILENAME.to_string(),
        hint: Some(format!("please create the {} file manually", MARKER_FILENAME)),
    })
}

/// [`locate`] the marker directory, falling back to [`resolve`].
pub fn locate_or_resolve<P>(start: &Path, prompt: &mut P) -> Result<PathBuf>
where
    P: CandidatePrompt + ?Sized,
{
    match locate(start) {
        Err(Error::MarkerNotFound { .. }) => {
            info!("no {} found, looking for git remotes", MARKER_FILENAME);
            resolve(start, prompt)
        }
        other => other,
    }
}
