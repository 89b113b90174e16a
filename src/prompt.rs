//! Confirmation of candidate package identities.
//!
//! When no marker file exists, each discovered candidate is offered to a
//! [`CandidatePrompt`] until one is accepted. The CLI uses
//! [`TerminalPrompt`] or, with `--yes`, [`AcceptFirst`]; tests can pass any
//! `FnMut(&Candidate) -> bool` closure.

use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::error::{Error, Result};
use crate::marker::Candidate;

/// Decides whether a candidate identity should be written to a marker file.
pub trait CandidatePrompt {
    fn accept(&mut self, candidate: &Candidate) -> Result<bool>;
}

impl<F> CandidatePrompt for F
where
    F: FnMut(&Candidate) -> bool,
{
    fn accept(&mut self, candidate: &Candidate) -> Result<bool> {
        Ok(self(candidate))
    }
}

/// Accepts the first candidate offered.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptFirst;

impl CandidatePrompt for AcceptFirst {
    fn accept(&mut self, _candidate: &Candidate) -> Result<bool> {
        Ok(true)
    }
}

/// Asks the user on the terminal, blocking until they answer.
#[derive(Default)]
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CandidatePrompt for TerminalPrompt {
    fn accept(&mut self, candidate: &Candidate) -> Result<bool> {
        let term = Term::stderr();
        if !term.is_term() {
            return Err(Error::NotATerminal {
                message: format!(
                    "found candidate {} but stderr is not a terminal",
                    candidate.identity
                ),
                hint: Some("pass --yes to accept the first candidate".to_string()),
            });
        }

        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(format!(
                "Do you want to create {} with the following content: {}",
                candidate.marker_path().display(),
                candidate.identity
            ))
            .default(false)
            .interact_on(&term)?;
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::PackageIdentity;
    use std::path::PathBuf;

    fn candidate() -> Candidate {
        Candidate {
            identity: PackageIdentity::parse("example.com/acme/widget").unwrap(),
            dir: PathBuf::from("/repo"),
        }
    }

    #[test]
    fn test_accept_first_always_accepts() {
        assert!(AcceptFirst.accept(&candidate()).unwrap());
    }

    #[test]
    fn test_closure_prompt() {
        let mut seen = Vec::new();
        let mut prompt = |c: &Candidate| {
            seen.push(c.identity.to_string());
            false
        };
        assert!(!prompt.accept(&candidate()).unwrap());
        assert_eq!(seen, vec!["example.com/acme/widget"]);
    }
}
