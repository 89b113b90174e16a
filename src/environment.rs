//! Child process environment.
//!
//! The environment is snapshotted once, adjusted in memory, and handed to the
//! child as a whole. Only the search-path variable and `PWD` are changed;
//! every other variable is passed through untouched.

use std::collections::BTreeMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// How the workspace root is combined with an existing search path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPathMode {
    /// Discard any existing value.
    Replace,
    /// Append to the existing value unless already present.
    Append,
}

impl SearchPathMode {
    pub fn from_replace_flag(replace: bool) -> Self {
        if replace {
            Self::Replace
        } else {
            Self::Append
        }
    }
}

/// An in-memory copy of a process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<OsString, OsString>,
}

impl Environment {
    /// Snapshot the current process environment.
    pub fn capture() -> Self {
        Self::from_vars(env::vars_os())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Point the search-path variable `var` at `root`.
    ///
    /// With [`SearchPathMode::Replace`], or when `var` is unset or empty, the
    /// variable becomes exactly `root`. Otherwise `root` is appended using the
    /// platform separator, unless it is already one of the segments.
    pub fn adapt_search_path(&mut self, var: &str, root: &Path, mode: SearchPathMode) -> Result<()> {
        let existing = self.get(var).filter(|v| !v.is_empty());

        let value = match (mode, existing) {
            (SearchPathMode::Replace, _) | (_, None) => root.as_os_str().to_os_string(),
            (SearchPathMode::Append, Some(existing)) => {
                let mut segments: Vec<PathBuf> = env::split_paths(existing).collect();
                if segments.iter().any(|segment| segment == root) {
                    debug!("{} already contains {}", var, root.display());
                    return Ok(());
                }
                segments.push(root.to_path_buf());
                env::join_paths(segments).map_err(|e| Error::Environment {
                    message: format!("cannot add {} to {}: {}", root.display(), var, e),
                })?
            }
        };

        debug!("{}={}", var, value.to_string_lossy());
        self.set(var, value);
        Ok(())
    }

    /// Iterate over all variables, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }
}
