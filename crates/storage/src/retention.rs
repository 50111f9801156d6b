// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retention sweep: prune log files older than the configured window.

use crate::scan::{scan_log_files, ScanError};
use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};

/// Outcome of one retention sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Log files examined.
    pub examined: usize,
    /// Files deleted.
    pub removed: usize,
}

/// Delete log files under `dir` whose last-modified time is older than
/// `retention` relative to `now`.
///
/// Deletion is best-effort per file: failing to delete one file is warned
/// and the sweep continues with the rest. Only a failure to list the
/// directory is an error.
pub fn sweep_expired(
    dir: &Path,
    retention: Duration,
    now: SystemTime,
) -> Result<SweepStats, ScanError> {
    let mut stats = SweepStats::default();
    for file in scan_log_files(dir)? {
        stats.examined += 1;
        // A modification time in the future counts as age zero.
        let age = now.duration_since(file.modified).unwrap_or(Duration::ZERO);
        if age <= retention {
            continue;
        }
        match std::fs::remove_file(&file.path) {
            Ok(()) => {
                info!(path = %file.path.display(), "deleted expired log file");
                stats.removed += 1;
            }
            Err(e) => {
                warn!(
                    path = %file.path.display(),
                    error = %e,
                    "failed to delete expired log file",
                );
            }
        }
    }
    Ok(stats)
}

#[cfg(test)]
#[path = "retention_tests.rs"]
mod tests;
