//! File path sets
//!
//! A `FileSet` holds the paths a revision touches in one category
//! (added, removed or modified).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Unordered set of file paths, compared by exact string equality
///
/// Paths are stored as given: no normalization, no case folding. Callers
/// must normalize consistently before inserting and before querying.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileSet {
    /// Sorted for deterministic iteration
    paths: BTreeSet<String>,
}

impl FileSet {
    /// Create an empty file set
    pub fn new() -> Self {
        Self {
            paths: BTreeSet::new(),
        }
    }

    /// Check if a path is in the set
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Add a path, returning `true` if it was not already present
    pub fn insert(&mut self, path: impl Into<String>) -> bool {
        self.paths.insert(path.into())
    }

    /// Number of paths
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over paths in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FileSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for FileSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for path in iter {
            self.insert(path);
        }
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
