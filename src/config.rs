//! Run configuration.
//!
//! [`RunConfig`] is filled once from the command line and then passed by
//! reference through every step of a run.

use std::ffi::OsString;

use crate::defaults::DEFAULT_SEARCH_PATH_VAR;
use crate::environment::SearchPathMode;
use crate::runner::ExecStrategy;

/// Settings for a single `ugo` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Replace the search-path variable instead of appending to it.
    pub replace: bool,
    /// Name of the search-path variable to adapt.
    pub search_path_var: String,
    pub strategy: ExecStrategy,
    /// Accept the first discovered package without asking.
    pub assume_yes: bool,
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl RunConfig {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            replace: false,
            search_path_var: DEFAULT_SEARCH_PATH_VAR.to_string(),
            strategy: ExecStrategy::default(),
            assume_yes: false,
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn search_path_mode(&self) -> SearchPathMode {
        SearchPathMode::from_replace_flag(self.replace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = RunConfig::new("go");
        assert_eq!(config.program, OsString::from("go"));
        assert_eq!(config.search_path_var, "GOPATH");
        assert_eq!(config.strategy, ExecStrategy::Replace);
        assert_eq!(config.search_path_mode(), SearchPathMode::Append);
        assert!(!config.assume_yes);
    }
}
