//! Run orchestration
//!
//! This module contains the engine that walks each configured root and
//! invokes the external formatter on every candidate.

use anyhow::{Result, anyhow};
use log::{error, info, warn};

use crate::config::Config;
use crate::discovery::{DiscoveryPolicy, Walker};

use super::command::ToolCommand;
use super::report::{InvocationOutcome, InvocationRecord, RunReport};

/// Options for a formatting run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// The configuration describing roots, tool, and policies
    pub config: Config,
    /// Whether to trace the commands without spawning anything
    pub dry_run: bool,
}

/// Formats every candidate file under every configured root
///
/// The roots are processed strictly in order and every invocation runs
/// to completion before the next one starts. Each command line is
/// logged before its process is spawned. A root that cannot be walked
/// is reported and counted, and the run continues with the next root;
/// failed invocations are likewise recorded without stopping the batch
/// unless `halt_on_failure` is set.
///
/// # Errors
/// Returns an error only when `halt_on_failure` is set and an
/// invocation fails
pub fn format_roots(options: &RunOptions) -> Result<RunReport> {
    let policy = DiscoveryPolicy::from_config(&options.config);
    let command = ToolCommand::from_config(&options.config);
    let mut report = RunReport::new();

    info!(
        "Formatting {} root(s) with '{}'{}...",
        options.config.roots.len(),
        command.program(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    for root in &options.config.roots {
        let walker = match Walker::new(root, policy.clone()) {
            Ok(walker) => walker,
            Err(err) => {
                error!("{err}");
                report.increment_roots_failed();
                continue;
            }
        };
        report.increment_roots_visited();

        for candidate in walker {
            let path = match candidate {
                Ok(path) => path,
                Err(err) => {
                    // Strict traversal surfaced an unreadable subtree;
                    // this root is abandoned, the run moves on
                    error!("{err}");
                    report.increment_roots_failed();
                    break;
                }
            };

            report.increment_files_discovered();

            let rendered = command.render(&path);
            info!("{rendered}");

            if options.dry_run {
                report.record(InvocationRecord {
                    path,
                    command: rendered,
                    outcome: InvocationOutcome::DryRun,
                });
                continue;
            }

            let outcome = match command.run(&path) {
                Ok(status) if status.success() => InvocationOutcome::Success,
                Ok(status) => {
                    warn!("Formatter exited with {} for {}", status, path.display());
                    InvocationOutcome::Failed {
                        code: status.code(),
                    }
                }
                Err(err) => {
                    warn!("Failed to launch '{}': {err}", command.program());
                    InvocationOutcome::LaunchFailed {
                        reason: err.to_string(),
                    }
                }
            };

            let failed = outcome.is_failure();
            report.record(InvocationRecord {
                path,
                command: rendered,
                outcome,
            });

            if failed && options.config.halt_on_failure {
                return Err(anyhow!(
                    "Aborting after a failed invocation (halt_on_failure is set)"
                ));
            }
        }
    }

    info!(
        "Finished: {} file(s) across {} root(s), {} failure(s)",
        report.stats.files_discovered,
        report.stats.roots_visited,
        report.stats.invocations_failed
    );

    Ok(report)
}
