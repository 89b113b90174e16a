//! # Error Handling
//!
//! This module defines the centralized error type for `ugo`. It uses the
//! `thiserror` library to describe every failure mode of the workspace setup
//! pipeline with a message the user can act on.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failures. Discovery failures
//!   (`MarkerNotFound`, `NoCandidates`, `NoSelection`) carry the marker file
//!   name so the user knows which file to create by hand.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Nothing in the library recovers from an error locally. The only errors that
//! are swallowed are `GitConfig` and `InvalidUrl` while scanning ancestor
//! directories for remotes; those are logged and the directory is skipped.

use std::path::PathBuf;

use thiserror::Error;

fn render_hint(hint: &Option<String>) -> String {
    hint.as_ref()
        .map(|h| format!("\n  hint: {}", h))
        .unwrap_or_default()
}

/// Main error type for ugo operations
#[derive(Error, Debug)]
pub enum Error {
    /// No ancestor of the starting directory contains a marker file.
    #[error("could not find a {marker} in any parent directory of {} up to the root directory", start.display())]
    MarkerNotFound { marker: String, start: PathBuf },

    /// No git remote could be turned into a package identity.
    #[error("no package auto detected to create a {marker} file{}", render_hint(hint))]
    NoCandidates {
        marker: String,
        hint: Option<String>,
    },

    /// The user declined every candidate identity.
    #[error("no package selected to create a {marker} file{}", render_hint(hint))]
    NoSelection {
        marker: String,
        hint: Option<String>,
    },

    /// A remote URL could not be translated into a package identity.
    #[error("invalid remote URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// A string is not usable as a slash-separated package identity.
    #[error("invalid package identity '{identity}': {message}")]
    InvalidIdentity { identity: String, message: String },

    /// A git configuration file could not be read or parsed.
    #[error("failed to read git config {}: {message}", path.display())]
    GitConfig { path: PathBuf, message: String },

    /// Something unexpected occupies a path inside the workspace: a non-link
    /// at the link location, or a link or file where a directory belongs.
    #[error("refusing to use {} in the workspace: {reason}", path.display())]
    WorkspaceConflict { path: PathBuf, reason: &'static str },

    /// An interactive confirmation was needed but no terminal is attached.
    #[error("cannot ask which package to use: {message}{}", render_hint(hint))]
    NotATerminal {
        message: String,
        hint: Option<String>,
    },

    /// The requested executable could not be found on the search path.
    #[error("command '{command}' not found: {message}")]
    CommandNotFound { command: String, message: String },

    /// The command ran but reported failure.
    #[error("command '{command}' failed{}", code.map(|c| format!(" with exit code {}", c)).unwrap_or_else(|| " (terminated by signal)".to_string()))]
    CommandFailed { command: String, code: Option<i32> },

    /// The command could not be started.
    #[error("failed to execute '{command}': {source}")]
    Exec {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The child environment could not be assembled.
    #[error("environment error: {message}")]
    Environment { message: String },

    /// The confirmation prompt failed.
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
