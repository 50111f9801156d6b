// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log file naming.
//!
//! The filename is the durable index: there is no manifest file.
//! `<bucket>_<sequence>.log` is built here and parsed back by the scanner
//! to recover state after a restart and to select retention candidates.

use logroll_core::BucketKey;
use std::path::{Path, PathBuf};

/// Path of the log file for `(bucket, sequence)` under `dir`.
pub fn log_file_path(dir: &Path, bucket: &BucketKey, sequence: u32) -> PathBuf {
    dir.join(format!("{}_{}.log", bucket, sequence))
}

/// Parse `<bucket>_<sequence>.log` back into its parts.
///
/// Returns `None` for names outside the grammar; the scanner and the
/// retention sweep skip those files.
pub fn parse_log_filename(name: &str) -> Option<(BucketKey, u32)> {
    let stem = name.strip_suffix(".log")?;
    let (bucket, sequence) = stem.rsplit_once('_')?;
    let bucket = BucketKey::parse(bucket)?;
    let sequence: u32 = sequence.parse().ok()?;
    Some((bucket, sequence))
}

#[cfg(test)]
#[path = "namer_tests.rs"]
mod tests;
