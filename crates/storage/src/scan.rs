// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directory scanning for existing log files.
//!
//! Used at construction to resume the sequence index of the current bucket
//! and by the retention sweep to find expired files.

use crate::namer::parse_log_filename;
use logroll_core::BucketKey;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;
use tracing::warn;

/// Errors from directory scans.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A log file found on disk, with the state its name encodes.
#[derive(Debug, Clone)]
pub struct LogFileInfo {
    pub path: PathBuf,
    pub bucket: BucketKey,
    pub sequence: u32,
    /// Last-modified time, the basis for file age in the retention sweep.
    pub modified: SystemTime,
}

/// List the log files under `dir`.
///
/// Entries whose names don't parse as `<bucket>_<sequence>.log` are
/// ignored. An entry whose metadata can't be read is skipped with a
/// warning rather than failing the whole scan.
pub fn scan_log_files(dir: &Path) -> Result<Vec<LogFileInfo>, ScanError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some((bucket, sequence)) = parse_log_filename(name) else {
            continue;
        };
        let modified = match entry.metadata().and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(e) => {
                warn!(
                    path = %entry.path().display(),
                    error = %e,
                    "skipping log file with unreadable metadata",
                );
                continue;
            }
        };
        files.push(LogFileInfo {
            path: entry.path(),
            bucket,
            sequence,
            modified,
        });
    }
    Ok(files)
}

/// Highest sequence index on disk for `bucket`, or `None` when the bucket
/// has no files yet.
pub fn max_sequence(dir: &Path, bucket: &BucketKey) -> Result<Option<u32>, ScanError> {
    let mut max = None;
    for file in scan_log_files(dir)? {
        if &file.bucket == bucket {
            max = max.max(Some(file.sequence));
        }
    }
    Ok(max)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
