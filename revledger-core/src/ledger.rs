//! Revision ledger
//!
//! Ordered collection of the active revisions. The ledger keeps at most one
//! revision per name and answers whether any of them blacklists a path.
//!
//! Two comparison modes are used and kept distinct:
//! - *identity*: `Arc::ptr_eq` on handles (`contains`, `remove_revision`)
//! - *name*: `Revision::name` equality (`find_by_name`, replacement in
//!   `add_revision`)

use std::sync::Arc;
use tracing::{debug, trace};

use crate::revision::RevisionHandle;

/// Result of [`RevisionLedger::add_revision`]
#[derive(Debug, Clone)]
pub enum AddOutcome {
    /// No revision was given
    Ignored,
    /// The same handle was already registered
    AlreadyPresent,
    /// A revision with the same name was replaced in place
    Replaced(RevisionHandle),
    /// The revision was appended at the end
    Appended,
}

/// Ordered, name-deduplicated set of active revisions
///
/// Cloning copies the list of handles; the revisions themselves are shared.
#[derive(Debug, Clone, Default)]
pub struct RevisionLedger {
    /// Insertion/replacement order
    revisions: Vec<RevisionHandle>,
}

impl RevisionLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            revisions: Vec::new(),
        }
    }

    /// Register a revision
    ///
    /// `None` is ignored. Re-adding a registered handle does nothing. A
    /// revision whose name matches an existing entry takes over that
    /// entry's position; otherwise it is appended.
    pub fn add_revision(&mut self, revision: impl Into<Option<RevisionHandle>>) -> AddOutcome {
        let revision: Option<RevisionHandle> = revision.into();
        let Some(revision) = revision else {
            debug!("Ignoring empty revision handle");
            return AddOutcome::Ignored;
        };

        for slot in self.revisions.iter_mut() {
            if Arc::ptr_eq(slot, &revision) {
                return AddOutcome::AlreadyPresent;
            }
            if slot.name() == revision.name() {
                debug!("Replacing revision '{}'", revision.name());
                let previous = std::mem::replace(slot, revision);
                return AddOutcome::Replaced(previous);
            }
        }

        debug!("Appending revision '{}'", revision.name());
        self.revisions.push(revision);
        AddOutcome::Appended
    }

    /// Remove the entry holding exactly this handle
    ///
    /// A different handle with the same name does not match. Returns the
    /// removed handle, or `None` if it was not registered.
    pub fn remove_revision(&mut self, revision: &RevisionHandle) -> Option<RevisionHandle> {
        let index = self
            .revisions
            .iter()
            .position(|entry| Arc::ptr_eq(entry, revision))?;
        debug!("Removing revision '{}'", revision.name());
        Some(self.revisions.remove(index))
    }

    /// Check if any active revision blacklists `path`
    pub fn is_file_blacklisted(&self, path: &str) -> bool {
        self.blacklisted_by(path).is_some()
    }

    /// First revision (in ledger order) that blacklists `path`
    pub fn blacklisted_by(&self, path: &str) -> Option<&RevisionHandle> {
        let found = self.revisions.iter().find(|rev| rev.is_blacklisted(path));
        if let Some(rev) = found {
            trace!("{} blacklisted by revision '{}'", path, rev.name());
        }
        found
    }

    /// Look up a revision by name
    pub fn find_by_name(&self, name: &str) -> Option<&RevisionHandle> {
        self.revisions.iter().find(|rev| rev.name() == name)
    }

    /// Check if this exact handle is registered
    pub fn contains(&self, revision: &RevisionHandle) -> bool {
        self.revisions.iter().any(|entry| Arc::ptr_eq(entry, revision))
    }

    /// Iterate over revisions in ledger order
    pub fn iter(&self) -> impl Iterator<Item = &RevisionHandle> {
        self.revisions.iter()
    }

    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }

    /// Drop all revisions
    pub fn clear(&mut self) {
        self.revisions.clear();
    }
}

impl<'a> IntoIterator for &'a RevisionLedger {
    type Item = &'a RevisionHandle;
    type IntoIter = std::slice::Iter<'a, RevisionHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.revisions.iter()
    }
}
