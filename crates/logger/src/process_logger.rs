// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide single-file logger.
//!
//! The degenerate cousin of [`Logger`](crate::Logger): no queue, no
//! background workers, no buckets. Just one guarded append to one file,
//! with size-based recycling (the file is removed and recreated once it
//! grows past 50 MiB).
//!
//! Lifecycle, stated explicitly: the instance is created by the first call
//! to [`init`] or [`instance`], whichever comes first, and lives until
//! process exit. [`init`] after the instance exists is an error, not a
//! reconfiguration. [`ProcessLogger::close`] drops the file handle early;
//! the next append reopens it.

use logroll_core::{format_timestamp_secs, render_bounded, MAX_RENDERED_BYTES};
use parking_lot::Mutex;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

/// Default file when [`instance`] is reached before [`init`].
const DEFAULT_PATH: &str = "logs/log.txt";

/// Ceiling after which the file is removed and recreated.
const RECYCLE_BYTES: u64 = 50 * 1024 * 1024;

/// Error from [`init`] when the process logger already exists.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("process logger already initialized")]
pub struct AlreadyInitialized;

static PROCESS: OnceLock<ProcessLogger> = OnceLock::new();

/// Initialize the process-wide logger at `path`.
///
/// Must run before the first [`instance`] call; afterwards the instance is
/// fixed and this returns [`AlreadyInitialized`].
pub fn init(path: impl Into<PathBuf>) -> Result<(), AlreadyInitialized> {
    PROCESS
        .set(ProcessLogger::with_limit(path.into(), RECYCLE_BYTES))
        .map_err(|_| AlreadyInitialized)
}

/// The process-wide logger, created at the default path `logs/log.txt` on
/// first use when [`init`] was never called.
pub fn instance() -> &'static ProcessLogger {
    PROCESS.get_or_init(|| ProcessLogger::with_limit(PathBuf::from(DEFAULT_PATH), RECYCLE_BYTES))
}

/// Single-file logger with one internal lock.
///
/// Every append is `[YYYY-MM-DD HH:MM:SS] message`, second resolution, no
/// level. Failures degrade to dropping the record, surfaced on the
/// diagnostic stream only.
pub struct ProcessLogger {
    inner: Mutex<State>,
    max_file_bytes: u64,
}

struct State {
    path: PathBuf,
    file: Option<File>,
}

impl ProcessLogger {
    fn with_limit(path: PathBuf, max_file_bytes: u64) -> Self {
        Self {
            inner: Mutex::new(State { path, file: None }),
            max_file_bytes,
        }
    }

    /// Append `message` with a timestamp prefix. Empty messages are
    /// ignored.
    pub fn log(&self, message: &str) {
        if message.is_empty() {
            return;
        }
        let mut state = self.inner.lock();
        if let Err(e) = state.append(self.max_file_bytes, message) {
            warn!(
                path = %state.path.display(),
                error = %e,
                "process logger dropped a record",
            );
        }
    }

    /// Substitute `{}` placeholders in `template` with `args` and append
    /// the result, capped at [`MAX_RENDERED_BYTES`].
    pub fn log_fmt(&self, template: &str, args: &[&dyn fmt::Display]) {
        let message = render_bounded(template, args, MAX_RENDERED_BYTES);
        self.log(&message);
    }

    /// Drop the file handle. The next append reopens the file; useful
    /// before handing the path to an external rotation tool.
    pub fn close(&self) {
        self.inner.lock().file = None;
    }
}

impl State {
    fn append(&mut self, max_file_bytes: u64, message: &str) -> io::Result<()> {
        self.recycle_if_oversized(max_file_bytes)?;
        if self.file.is_none() {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            self.file = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            );
        }
        if let Some(file) = self.file.as_mut() {
            let line = format!(
                "[{}] {}\n",
                format_timestamp_secs(chrono::Local::now()),
                message
            );
            file.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Recycling keys off the on-disk size, not the bytes written through
    /// the current handle.
    fn recycle_if_oversized(&mut self, max_file_bytes: u64) -> io::Result<()> {
        let size = match std::fs::metadata(&self.path) {
            Ok(metadata) => metadata.len(),
            Err(_) => return Ok(()),
        };
        if size > max_file_bytes {
            self.file = None;
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "process_logger_tests.rs"]
mod tests;
