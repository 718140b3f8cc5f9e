//! revledger Core Library
//!
//! Tracks revisions of a virtual file database and decides which files
//! must bypass their original source:
//! - File sets (paths added, removed or modified by a revision)
//! - Revisions (named change-sets)
//! - Revision ledger (name-deduplicated set of active revisions)
//! - Shared ledger for concurrent registration and lookup

pub mod file_set;
pub mod ledger;
pub mod revision;
pub mod shared;

pub use file_set::FileSet;
pub use ledger::{AddOutcome, RevisionLedger};
pub use revision::{Revision, RevisionHandle};
pub use shared::SharedRevisionLedger;
