//! Revision change-sets
//!
//! A `Revision` describes which files a change-set added, removed or
//! modified relative to the baseline database. Added and removed files
//! supersede the original source; modified files still resolve through it.

use std::sync::Arc;

use crate::file_set::FileSet;

/// Shared handle to a revision, as stored by the ledger
///
/// Two handles are the *same* revision only if `Arc::ptr_eq` holds.
/// Equal names do not make two handles identical.
pub type RevisionHandle = Arc<Revision>;

/// A named change-set over the file database
///
/// Each category is optional; an absent set behaves as an empty one.
/// Cloning duplicates the fields, so the clone shares the `FileSet`
/// handles with the original.
#[derive(Debug, Clone, Default)]
pub struct Revision {
    /// Dedup key inside a ledger
    name: String,
    files_added: Option<Arc<FileSet>>,
    files_removed: Option<Arc<FileSet>>,
    files_modified: Option<Arc<FileSet>>,
}

impl Revision {
    /// Create a revision with no file sets
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files_added: None,
            files_removed: None,
            files_modified: None,
        }
    }

    /// Revision identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files_added(&self) -> Option<&Arc<FileSet>> {
        self.files_added.as_ref()
    }

    pub fn files_removed(&self) -> Option<&Arc<FileSet>> {
        self.files_removed.as_ref()
    }

    pub fn files_modified(&self) -> Option<&Arc<FileSet>> {
        self.files_modified.as_ref()
    }

    pub fn set_files_added(&mut self, files: Option<Arc<FileSet>>) {
        self.files_added = files;
    }

    pub fn set_files_removed(&mut self, files: Option<Arc<FileSet>>) {
        self.files_removed = files;
    }

    pub fn set_files_modified(&mut self, files: Option<Arc<FileSet>>) {
        self.files_modified = files;
    }

    /// Builder form of [`Revision::set_files_added`]
    pub fn with_files_added(mut self, files: impl Into<Arc<FileSet>>) -> Self {
        self.files_added = Some(files.into());
        self
    }

    /// Builder form of [`Revision::set_files_removed`]
    pub fn with_files_removed(mut self, files: impl Into<Arc<FileSet>>) -> Self {
        self.files_removed = Some(files.into());
        self
    }

    /// Builder form of [`Revision::set_files_modified`]
    pub fn with_files_modified(mut self, files: impl Into<Arc<FileSet>>) -> Self {
        self.files_modified = Some(files.into());
        self
    }

    /// Check if this revision supersedes the original source for `path`
    ///
    /// True when the path was added or removed by this revision. Modified
    /// files are not blacklisted: they still load through the original
    /// path, only with different content.
    pub fn is_blacklisted(&self, path: &str) -> bool {
        in_set(&self.files_removed, path) || in_set(&self.files_added, path)
    }

    /// Check if this revision modifies `path` in place
    pub fn is_modified(&self, path: &str) -> bool {
        in_set(&self.files_modified, path)
    }

    /// Wrap into a shared handle for registration in a ledger
    pub fn into_handle(self) -> RevisionHandle {
        Arc::new(self)
    }
}

fn in_set(files: &Option<Arc<FileSet>>, path: &str) -> bool {
    files.as_ref().is_some_and(|set| set.contains(path))
}
