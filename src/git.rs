//! Read-only access to git remote configuration.
//!
//! Only the repository's `config` file is consulted; nothing is fetched and
//! the `git` binary is never invoked. Both layouts git uses on disk are
//! understood:
//!
//! - a `.git` directory holding `config`
//! - a `.git` file containing `gitdir: <path>` (linked worktrees and
//!   submodules), where a `commondir` file may redirect to the shared config

use std::fs;
use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};
use log::debug;

use crate::error::{Error, Result};

/// A configured remote and one of its URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub name: String,
    pub url: String,
}

/// Locate the git config file for a repository whose work tree is `dir`.
///
/// Returns `None` when `dir` is not the top of a git work tree.
pub fn config_path(dir: &Path) -> Option<PathBuf> {
    let dot_git = dir.join(".git");
    let git_dir = if dot_git.is_dir() {
        dot_git
    } else if dot_git.is_file() {
        resolve_gitdir_file(&dot_git, dir)?
    } else {
        return None;
    };

    let common_dir = fs::read_to_string(git_dir.join("commondir"))
        .ok()
        .map(|content| git_dir.join(content.trim()))
        .unwrap_or(git_dir);

    let config = common_dir.join("config");
    config.is_file().then_some(config)
}

/// Follow a `gitdir: <path>` pointer file.
fn resolve_gitdir_file(dot_git: &Path, dir: &Path) -> Option<PathBuf> {
    let content = fs::read_to_string(dot_git).ok()?;
    let target = content.lines().find_map(|line| line.strip_prefix("gitdir:"))?;
    let target = Path::new(target.trim());
    debug!("{} points to git dir {}", dot_git.display(), target.display());
    Some(dir.join(target))
}

/// Read every remote URL from a git config file.
///
/// Remotes are returned in file order; a remote with several `url` entries
/// contributes one [`Remote`] per URL. Section and key names match
/// case-insensitively, as git does.
pub fn read_remotes(config: &Path) -> Result<Vec<Remote>> {
    let config_error = |message: String| Error::GitConfig {
        path: config.to_path_buf(),
        message,
    };
    let text = fs::read_to_string(config).map_err(|e| config_error(e.to_string()))?;

    // Escapes stay off so backslashes in URLs survive untouched.
    let options = ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(&normalize(&text), options)
        .map_err(|e| config_error(e.to_string()))?;

    let mut remotes = Vec::new();
    for (section, properties) in ini.iter() {
        let Some(name) = section.and_then(remote_name) else {
            continue;
        };
        for (key, url) in properties.iter() {
            if key.eq_ignore_ascii_case("url") {
                remotes.push(Remote {
                    name: name.to_string(),
                    url: url.to_string(),
                });
            }
        }
    }
    Ok(remotes)
}

/// Rewrite git config syntax that `rust-ini` reads differently.
///
/// Comment lines (indented or not) are dropped, as are bare boolean keys
/// without `=`. Trailing `#`/`;` comments outside double quotes are cut from
/// section headers and values.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }
        let line = if trimmed.starts_with('[') {
            match unquoted_position(trimmed, &[']']) {
                Some(end) => &trimmed[..=end],
                // Unterminated header; left for the parser to reject.
                None => trimmed,
            }
        } else if !trimmed.contains('=') {
            continue;
        } else {
            let end = unquoted_position(trimmed, &['#', ';']).unwrap_or(trimmed.len());
            trimmed[..end].trim_end()
        };
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Byte offset of the first of `targets` outside double quotes.
fn unquoted_position(line: &str, targets: &[char]) -> Option<usize> {
    let mut quoted = false;
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => quoted = !quoted,
            c if !quoted && targets.contains(&c) => return Some(i),
            _ => {}
        }
    }
    None
}

/// Extract `origin` from `remote "origin"` (or the legacy `remote.origin`).
fn remote_name(section: &str) -> Option<&str> {
    let section = section.trim();
    let (prefix, rest) = section.split_at_checked("remote".len())?;
    if !prefix.eq_ignore_ascii_case("remote") {
        return None;
    }
    let name = if let Some(legacy) = rest.strip_prefix('.') {
        legacy
    } else if rest.starts_with(char::is_whitespace) {
        rest.trim().trim_matches('"')
    } else {
        return None;
    };
    (!name.is_empty()).then_some(name)
}
