//! # ugo
//!
//! This library runs commands inside a synthetic, path-based workspace for a
//! project. It is designed to be used by the `ugo` command-line tool, which
//! exposes a project living anywhere on disk under a GOPATH-style layout.
//!
//! ## Quick Example
//!
//! ```
//! use ugo::identity::PackageIdentity;
//!
//! let identity = PackageIdentity::from_remote_url("git@github.com:acme/widget.git").unwrap();
//! assert_eq!(identity.as_str(), "github.com/acme/widget");
//! assert_eq!(identity.leaf(), "widget");
//! ```
//!
//! ## Core Concepts
//!
//! - **Marker file (`marker`)**: `.gopackage` marks the project root and holds
//!   its package identity. It is created interactively from git remotes
//!   (`git`, `prompt`) when missing.
//! - **Package identity (`identity`)**: a validated `host/path/to/repo`
//!   string, derived from remote URLs with one canonical rule.
//! - **Workspace (`workspace`)**: `<project>/.workspace/src/<identity>`, a
//!   symlink back to the project, recreated on every run.
//! - **Environment (`environment`)**: the child environment, with the
//!   search-path variable pointed at the workspace root.
//! - **Runner (`runner`)**: replaces the process with the command, or runs
//!   it with captured output.
//!
//! ## Execution Flow
//!
//! [`launch::prepare`] locates or creates the marker, materializes the
//! workspace and adapts the environment; [`runner::run`] then starts the
//! command from the workspace package path.

pub mod config;
pub mod defaults;
pub mod environment;
pub mod error;
pub mod git;
pub mod identity;
pub mod launch;
pub mod marker;
pub mod path;
pub mod prompt;
pub mod runner;
pub mod workspace;

#[cfg(test)]
mod identity_proptest;
