//! Default values for ugo.
//!
//! This module provides centralized names and defaults used across the
//! library and the CLI, ensuring consistency and avoiding duplication.

/// Name of the marker file that identifies a project root.
///
/// The file holds a single package identity such as `github.com/acme/widget`.
pub const MARKER_FILENAME: &str = ".gopackage";

/// Hidden directory, next to the marker file, that acts as the search-path root.
pub const WORKSPACE_DIRNAME: &str = ".workspace";

/// Subdirectory of the workspace root mirroring the package identity.
pub const WORKSPACE_SRC_DIRNAME: &str = "src";

/// Search-path variable rewritten for the child process unless overridden
/// by `--var` or `UGO_SEARCH_PATH_VAR`.
pub const DEFAULT_SEARCH_PATH_VAR: &str = "GOPATH";

/// Variable that tells the child its logical working directory.
pub const PWD_VAR: &str = "PWD";

/// Variable used to look up the executable to run.
pub const PATH_VAR: &str = "PATH";
