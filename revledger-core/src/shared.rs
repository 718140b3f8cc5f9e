//! Shared revision ledger
//!
//! Wraps a [`RevisionLedger`] in an async reader/writer lock so one ledger
//! can be registered into and queried from many tasks. Each mutation holds
//! the write lock across its whole scan-then-mutate sequence.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ledger::{AddOutcome, RevisionLedger};
use crate::revision::RevisionHandle;

/// Cloneable, task-safe handle to a revision ledger
#[derive(Debug, Clone, Default)]
pub struct SharedRevisionLedger {
    inner: Arc<RwLock<RevisionLedger>>,
}

impl SharedRevisionLedger {
    /// Create an empty shared ledger
    pub fn new() -> Self {
        Self::from_ledger(RevisionLedger::new())
    }

    /// Share an existing ledger
    pub fn from_ledger(ledger: RevisionLedger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// See [`RevisionLedger::add_revision`]
    pub async fn add_revision(&self, revision: impl Into<Option<RevisionHandle>>) -> AddOutcome {
        let revision: Option<RevisionHandle> = revision.into();
        let mut ledger = self.inner.write().await;
        ledger.add_revision(revision)
    }

    /// See [`RevisionLedger::remove_revision`]
    pub async fn remove_revision(&self, revision: &RevisionHandle) -> Option<RevisionHandle> {
        let mut ledger = self.inner.write().await;
        ledger.remove_revision(revision)
    }

    /// See [`RevisionLedger::is_file_blacklisted`]
    pub async fn is_file_blacklisted(&self, path: &str) -> bool {
        let ledger = self.inner.read().await;
        ledger.is_file_blacklisted(path)
    }

    /// See [`RevisionLedger::blacklisted_by`]
    pub async fn blacklisted_by(&self, path: &str) -> Option<RevisionHandle> {
        let ledger = self.inner.read().await;
        ledger.blacklisted_by(path).cloned()
    }

    /// See [`RevisionLedger::find_by_name`]
    pub async fn find_by_name(&self, name: &str) -> Option<RevisionHandle> {
        let ledger = self.inner.read().await;
        ledger.find_by_name(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Copy of the current ledger, sharing the revision handles
    pub async fn snapshot(&self) -> RevisionLedger {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_set::FileSet;
    use crate::revision::Revision;

    fn adding(name: &str, path: &str) -> RevisionHandle {
        Revision::new(name)
            .with_files_added([path].into_iter().collect::<FileSet>())
            .into_handle()
    }

    #[tokio::test]
    async fn test_shared_add_and_query() {
        let ledger = SharedRevisionLedger::new();
        assert!(ledger.is_empty().await);

        ledger.add_revision(adding("rev1", "x")).await;
        assert!(ledger.is_file_blacklisted("x").await);
        assert_eq!(
            ledger.blacklisted_by("x").await.map(|r| r.name().to_string()),
            Some("rev1".to_string())
        );

        ledger.add_revision(adding("rev1", "y")).await;
        assert!(!ledger.is_file_blacklisted("x").await);
        assert!(ledger.is_file_blacklisted("y").await);
        assert_eq!(ledger.len().await, 1);
    }

    #[tokio::test]
    async fn test_shared_remove() {
        let ledger = SharedRevisionLedger::new();
        let rev = adding("rev1", "x");
        ledger.add_revision(rev.clone()).await;

        assert!(ledger.remove_revision(&rev).await.is_some());
        assert!(ledger.remove_revision(&rev).await.is_none());
        assert!(ledger.find_by_name("rev1").await.is_none());
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let ledger = SharedRevisionLedger::new();
        ledger.add_revision(adding("rev1", "x")).await;

        let snapshot = ledger.snapshot().await;
        ledger.add_revision(adding("rev2", "y")).await;

        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot.is_file_blacklisted("y"));
        assert_eq!(ledger.len().await, 2);
    }

    #[tokio::test]
    async fn test_concurrent_writers_keep_names_unique() {
        let ledger = SharedRevisionLedger::new();
        let mut handles = vec![];

        for i in 0..20 {
            let ledger = ledger.clone();
            handles.push(tokio::spawn(async move {
                let name = format!("rev{}", i % 5);
                ledger.add_revision(adding(&name, &format!("file{}.osg", i))).await;
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        let snapshot = ledger.snapshot().await;
        assert_eq!(snapshot.len(), 5);
        for i in 0..5 {
            assert!(snapshot.find_by_name(&format!("rev{}", i)).is_some());
        }
    }
}
