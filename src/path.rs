//! Ancestor directory traversal for ugo
//!
//! Both the marker lookup and the git remote scan walk from a starting
//! directory up to the filesystem root. They share the iterator defined here
//! so the two walks always visit the same directories in the same order.

use std::path::{Path, PathBuf};

/// Lazily yields `start`, then each parent, ending at the filesystem root.
///
/// The walk is purely lexical: it never touches the filesystem, so it is
/// finite even when directories are missing. A clone resumes from the same
/// position, and [`walk_up`] can be called again for a fresh walk.
#[derive(Debug, Clone)]
pub struct WalkUp<'a> {
    next: Option<&'a Path>,
}

impl<'a> Iterator for WalkUp<'a> {
    type Item = &'a Path;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent().filter(|p| !p.as_os_str().is_empty());
        Some(current)
    }
}

/// Start a walk at `start` (inclusive).
pub fn walk_up(start: &Path) -> WalkUp<'_> {
    WalkUp {
        next: Some(start).filter(|p| !p.as_os_str().is_empty()),
    }
}

/// Return the first directory, from `start` upwards, accepted by `predicate`.
pub fn find_ancestor<P>(start: &Path, mut predicate: P) -> Option<PathBuf>
where
    P: FnMut(&Path) -> bool,
{
    walk_up(start)
        .find(|dir| predicate(dir))
        .map(Path::to_path_buf)
}
