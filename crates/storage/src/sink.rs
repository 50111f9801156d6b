// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The log sink: one open file, size-triggered rotation.
//!
//! The sink is single-threaded state; the logger wraps it in its sink lock
//! and every call below happens with that lock held. Size rotation is
//! handled here; bucket rotation is driven externally by the maintenance
//! worker through [`LogSink::roll_bucket`].

use crate::namer::log_file_path;
use logroll_core::BucketKey;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// Owns the currently-open log file, the current bucket and sequence
/// index, and the byte counter that drives size-triggered rotation.
///
/// Invariants: at most one handle is open at a time; the sequence index
/// strictly increases within a bucket; the byte counter is monotonically
/// non-decreasing until a rotation resets it alongside a new handle.
pub struct LogSink {
    dir: PathBuf,
    bucket: BucketKey,
    sequence: u32,
    bytes: u64,
    max_file_bytes: u64,
    file: Option<File>,
}

impl LogSink {
    /// Sink writing to `<dir>/<bucket>_<sequence>.log`.
    ///
    /// No file is opened until the first write, so an idle logger never
    /// creates empty files.
    pub fn new(
        dir: impl Into<PathBuf>,
        bucket: BucketKey,
        sequence: u32,
        max_file_bytes: u64,
    ) -> Self {
        Self {
            dir: dir.into(),
            bucket,
            sequence,
            bytes: 0,
            max_file_bytes,
            file: None,
        }
    }

    /// Append `line` plus a newline to the current file.
    ///
    /// The file opens lazily on first use. When the byte counter reaches
    /// the configured ceiling the handle is closed, the sequence index
    /// advances, and the counter resets; the next write opens the new
    /// file. A failed open or write leaves the sink state unchanged, so a
    /// later call retries cleanly.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        if self.file.is_none() {
            let path = self.current_path();
            self.file = Some(OpenOptions::new().create(true).append(true).open(path)?);
        }
        if let Some(file) = self.file.as_mut() {
            file.write_all(line.as_bytes())?;
            file.write_all(b"\n")?;
        }
        self.bytes += line.len() as u64 + 1;
        if self.bytes >= self.max_file_bytes {
            self.file = None;
            self.sequence += 1;
            self.bytes = 0;
        }
        Ok(())
    }

    /// Switch to a new time bucket: close the current file and restart the
    /// sequence at 0.
    ///
    /// Called by the maintenance worker on rollover, whether or not a
    /// write is pending, so the new bucket's first write lands in `_0`.
    pub fn roll_bucket(&mut self, bucket: BucketKey) {
        if let Some(file) = self.file.take() {
            let _ = file.sync_all();
        }
        self.bucket = bucket;
        self.sequence = 0;
        self.bytes = 0;
    }

    /// Path the next write lands in.
    pub fn current_path(&self) -> PathBuf {
        log_file_path(&self.dir, &self.bucket, self.sequence)
    }

    pub fn bucket(&self) -> &BucketKey {
        &self.bucket
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Bytes accounted to the current file.
    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
