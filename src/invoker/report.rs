//! Run reporting
//!
//! This module defines the per-invocation records and the counters
//! accumulated over a formatting run.

use std::path::PathBuf;

/// Result of a single formatter invocation
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationOutcome {
    /// The formatter exited with status zero
    Success,
    /// The formatter exited with a non-zero status
    Failed { code: Option<i32> },
    /// The formatter process could not be started
    LaunchFailed { reason: String },
    /// Dry-run mode: the command was traced but never spawned
    DryRun,
}

impl InvocationOutcome {
    /// Whether this outcome counts as a failure
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            InvocationOutcome::Failed { .. } | InvocationOutcome::LaunchFailed { .. }
        )
    }
}

/// One traced invocation
#[derive(Debug, Clone)]
pub struct InvocationRecord {
    /// The candidate file the formatter was pointed at
    pub path: PathBuf,
    /// The rendered command line, exactly as traced
    pub command: String,
    /// What happened when the command ran
    pub outcome: InvocationOutcome,
}

/// Statistics about a formatting run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of roots that were walked
    pub roots_visited: usize,
    /// Number of roots that could not be walked to completion
    pub roots_failed: usize,
    /// Number of candidate files discovered across all roots
    pub files_discovered: usize,
    /// Number of invocations that exited successfully
    pub invocations_succeeded: usize,
    /// Number of invocations that failed to run or exited non-zero
    pub invocations_failed: usize,
}

/// Accumulated outcome of a formatting run
///
/// Records are kept in invocation order: all of the first root's
/// candidates, then the second root's, and so on.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Statistics about the run
    pub stats: RunStats,
    /// Every traced invocation, in order
    pub records: Vec<InvocationRecord>,
}

impl RunReport {
    /// Creates an empty report
    pub fn new() -> Self {
        RunReport::default()
    }

    /// Adds an invocation record and updates the counters
    pub fn record(&mut self, record: InvocationRecord) {
        match &record.outcome {
            InvocationOutcome::Success => self.stats.invocations_succeeded += 1,
            InvocationOutcome::Failed { .. } | InvocationOutcome::LaunchFailed { .. } => {
                self.stats.invocations_failed += 1;
            }
            InvocationOutcome::DryRun => {}
        }
        self.records.push(record);
    }

    /// Increments the number of roots walked
    pub fn increment_roots_visited(&mut self) {
        self.stats.roots_visited += 1;
    }

    /// Increments the number of roots that could not be walked
    pub fn increment_roots_failed(&mut self) {
        self.stats.roots_failed += 1;
    }

    /// Increments the number of candidates discovered
    pub fn increment_files_discovered(&mut self) {
        self.stats.files_discovered += 1;
    }

    /// Whether the run completed without any failure
    ///
    /// True only when every root was walked and no invocation failed.
    pub fn success(&self) -> bool {
        self.stats.roots_failed == 0 && self.stats.invocations_failed == 0
    }
}
