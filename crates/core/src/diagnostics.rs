//! Diagnostics Log & Relay
//!
//! The diagnostics log is a process-wide, append-only list of issue messages.
//! The analysis engine writes to it; a session only ever reads it, taking the
//! length before the engine call and slicing the new entries afterwards.
//!
//! Sessions running concurrently against the same log can observe each
//! other's entries in their slice. The relay does not try to separate them.

use std::sync::{Arc, RwLock};

/// Read access to a diagnostics log.
pub trait DiagnosticsLog: Send + Sync {
    /// Number of issues recorded so far.
    fn len(&self) -> usize;

    /// Issues in `[from, to)`, clamped to the current length.
    fn slice(&self, from: usize, to: usize) -> Vec<String>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared, cloneable handle to an in-process diagnostics log.
///
/// Clones point at the same underlying list. Entries can be appended but
/// never removed.
#[derive(Debug, Clone, Default)]
pub struct SharedDiagnosticsLog {
    issues: Arc<RwLock<Vec<String>>>,
}

impl SharedDiagnosticsLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one issue.
    pub fn push(&self, issue: impl Into<String>) {
        let mut issues = self.issues.write().unwrap_or_else(|e| e.into_inner());
        issues.push(issue.into());
    }

    /// Copy of every recorded issue.
    pub fn snapshot(&self) -> Vec<String> {
        self.issues.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl DiagnosticsLog for SharedDiagnosticsLog {
    fn len(&self) -> usize {
        self.issues.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn slice(&self, from: usize, to: usize) -> Vec<String> {
        let issues = self.issues.read().unwrap_or_else(|e| e.into_inner());
        let to = to.min(issues.len());
        if from >= to {
            return Vec::new();
        }
        issues[from..to].to_vec()
    }
}

/// Issues added to `log` since it had `before` entries, in log order.
///
/// Returns an empty list when nothing was added.
pub fn issues_since<L>(log: &L, before: usize) -> Vec<String>
where
    L: DiagnosticsLog + ?Sized,
{
    log.slice(before, log.len())
}
