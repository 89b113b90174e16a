//! Shared test utilities for E2E tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_marker("example.com/acme/widget");
//!     fixture.command().args(["true"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::remotes;
    pub use super::TestFixture;
}

/// Remote URLs used across tests.
#[allow(dead_code)]
pub mod remotes {
    pub const SSH: &str = "git@example.com:acme/widget.git";
    pub const HTTPS: &str = "https://example.com/acme/widget.git";
    pub const OTHER: &str = "git@example.org:team/gadget.git";
}

/// A temporary project directory.
///
/// [`TestFixture::root`] is the canonical path of the directory, which is
/// what the binary sees as its working directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    root: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory");
        Self { temp_dir, root }
    }

    /// Add a `.gopackage` marker file with the given identity.
    pub fn with_marker(self, identity: &str) -> Self {
        self.with_file(".gopackage", identity)
    }

    /// Add a `.git/config` declaring one remote per URL.
    pub fn with_git_remotes(self, urls: &[&str]) -> Self {
        let mut config = String::from("[core]\n\trepositoryformatversion = 0\n");
        for (i, url) in urls.iter().enumerate() {
            let name = if i == 0 {
                "origin".to_string()
            } else {
                format!("remote{}", i)
            };
            config.push_str(&format!("[remote \"{}\"]\n\turl = {}\n", name, url));
        }
        self.with_file(".git/config", &config)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Create a directory (and parents) inside the fixture.
    #[allow(dead_code)]
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Canonical path of the project directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/.workspace`
    pub fn workspace_root(&self) -> PathBuf {
        self.root.join(".workspace")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command running in this fixture's directory with a clean
    /// search path and logging left at its default.
    pub fn command(&self) -> assert_cmd::Command {
        self.command_in(".")
    }

    /// Like [`TestFixture::command`], starting in a subdirectory.
    pub fn command_in(&self, subdir: &str) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ugo");
        cmd.current_dir(self.root.join(subdir))
            .env_remove("GOPATH")
            .env_remove("UGO_SEARCH_PATH_VAR")
            .env_remove("UGO_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_root_is_canonical() {
        let fixture = TestFixture::new();
        assert!(fixture.root().is_absolute());
        assert_eq!(fixture.root(), fixture.root().canonicalize().unwrap());
    }

    #[test]
    fn test_fixture_with_git_remotes() {
        let fixture = TestFixture::new().with_git_remotes(&[remotes::SSH, remotes::OTHER]);
        let config = std::fs::read_to_string(fixture.root().join(".git/config")).unwrap();
        assert!(config.contains("[remote \"origin\"]"));
        assert!(config.contains(remotes::OTHER));
    }
}
