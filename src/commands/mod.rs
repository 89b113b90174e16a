//! # CLI Command Implementations
//!
//! `ugo` has a single job, running a command, plus a helper that prints
//! shell completions. Each lives in its own file with an `execute` function
//! that calls into the `ugo` library.

pub mod completions;
pub mod run;
