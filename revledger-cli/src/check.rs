//! `check` command: query paths against a ledger built from arguments

use revledger_core::RevisionLedger;
use serde::Serialize;
use tracing::debug;

use crate::revision_arg::RevisionArg;

/// Blacklist verdict for one path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub path: String,
    pub blacklisted: bool,
    /// Revision that supersedes the path, if any
    pub revision: Option<String>,
}

/// Register the revisions in order; later names replace earlier ones
pub fn build_ledger(revisions: Vec<RevisionArg>) -> RevisionLedger {
    let mut ledger = RevisionLedger::new();
    for arg in revisions {
        let outcome = ledger.add_revision(arg.into_revision().into_handle());
        debug!("Registered revision: {:?}", outcome);
    }
    ledger
}

pub fn check_paths(ledger: &RevisionLedger, paths: &[String]) -> Vec<PathReport> {
    paths
        .iter()
        .map(|path| {
            let revision = ledger.blacklisted_by(path).map(|rev| rev.name().to_string());
            PathReport {
                path: path.clone(),
                blacklisted: revision.is_some(),
                revision,
            }
        })
        .collect()
}

/// Human-readable line for one report
pub fn format_report(report: &PathReport) -> String {
    match &report.revision {
        Some(name) => format!("{}: blacklisted ({})", report.path, name),
        None => format!("{}: ok", report.path),
    }
}
