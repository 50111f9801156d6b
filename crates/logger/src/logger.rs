// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The logger facade.

use crate::config::LoggerConfig;
use crate::queue::RecordQueue;
use crate::worker::{self, Shared};
use logroll_core::{
    format_record, render_bounded, BucketKey, Clock, LogLevel, SystemClock,
    MAX_RENDERED_BYTES,
};
use logroll_storage::{max_sequence, LogSink};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tracing::warn;

/// Errors constructing a [`Logger`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base directory could not be created. Fatal: no logger instance
    /// is returned.
    #[error("cannot create log directory {}: {source}", .dir.display())]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A background worker thread could not be started.
    #[error("cannot spawn {name} thread: {source}")]
    SpawnThread {
        name: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Asynchronous, rotating, retention-managed file logger.
///
/// Records are formatted as `[<timestamp> <LEVEL>] <message>` and written
/// to `<dir>/<bucket>_<sequence>.log`. In async mode callers only ever
/// block on the queue lock; a background worker drains the queue to disk.
/// In sync mode the caller writes under the sink lock and absorbs the I/O
/// latency itself.
///
/// After any runtime failure the logger degrades to dropping records; it
/// never panics into or returns errors to logging call sites.
pub struct Logger {
    shared: Arc<Shared>,
    async_mode: bool,
    flush_handle: Option<JoinHandle<()>>,
    maintenance_handle: Option<JoinHandle<()>>,
}

impl Logger {
    /// Construct with the system clock.
    pub fn new(config: LoggerConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Construct with an injected clock; bucket rollover and the retention
    /// gate follow it.
    pub fn with_clock(config: LoggerConfig, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        std::fs::create_dir_all(&config.dir).map_err(|source| ConfigError::CreateDir {
            dir: config.dir.clone(),
            source,
        })?;

        let bucket = BucketKey::current(clock.now(), config.rotation);
        // Resume one past the highest sequence already on disk for this
        // bucket; a restart never appends to a prior run's files.
        let sequence = match max_sequence(&config.dir, &bucket) {
            Ok(Some(max)) => max + 1,
            Ok(None) => 0,
            Err(e) => {
                warn!(
                    dir = %config.dir.display(),
                    error = %e,
                    "initial scan failed, starting at sequence 0",
                );
                0
            }
        };

        let async_mode = config.async_mode;
        let sink = LogSink::new(
            config.dir.clone(),
            bucket,
            sequence,
            config.max_file_bytes,
        );
        let shared = Arc::new(Shared {
            sink: Mutex::new(sink),
            queue: RecordQueue::new(config.flush_interval()),
            level: AtomicU8::new(config.level.as_u8()),
            exit: AtomicBool::new(false),
            clock,
            config,
        });

        let flush_handle = if async_mode {
            Some(spawn_worker(
                "logroll-flush",
                Arc::clone(&shared),
                worker::run_flush,
            )?)
        } else {
            None
        };
        let maintenance_handle = match spawn_worker(
            "logroll-maintenance",
            Arc::clone(&shared),
            worker::run_maintenance,
        ) {
            Ok(handle) => Some(handle),
            Err(e) => {
                // Unwind the flush worker before surfacing the error so no
                // thread outlives the failed construction.
                shared.exit.store(true, Ordering::SeqCst);
                if let Some(handle) = flush_handle {
                    let _ = handle.join();
                }
                return Err(e);
            }
        };

        Ok(Self {
            shared,
            async_mode,
            flush_handle,
            maintenance_handle,
        })
    }

    /// Write `message` at `level`.
    ///
    /// Returns without side effects when the level is below the current
    /// threshold or the message is empty.
    pub fn log(&self, level: LogLevel, message: &str) {
        if level < self.level() || message.is_empty() {
            return;
        }
        let record = format_record(self.shared.clock.now(), level, message);
        if self.async_mode {
            self.shared.queue.push(record);
        } else {
            self.shared.write_batch(VecDeque::from([record]));
        }
    }

    /// Substitute `{}` placeholders in `template` with `args` and log the
    /// result at `level`.
    ///
    /// Rendering is capped at [`MAX_RENDERED_BYTES`]; anything beyond is
    /// silently truncated. The [`log_fmt!`](crate::log_fmt) macro packs
    /// the argument slice.
    pub fn log_fmt(&self, level: LogLevel, template: &str, args: &[&dyn fmt::Display]) {
        if level < self.level() {
            return;
        }
        let message = render_bounded(template, args, MAX_RENDERED_BYTES);
        self.log(level, &message);
    }

    /// Change the threshold.
    ///
    /// Wait-free and observable by subsequent calls; a call that already
    /// read the old level may still apply the old filter (weak
    /// consistency on level changes).
    pub fn set_level(&self, level: LogLevel) {
        self.shared.level.store(level.as_u8(), Ordering::SeqCst);
    }

    /// Current threshold.
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.shared.level.load(Ordering::SeqCst))
    }

    /// Bucket the next write lands in.
    pub fn current_bucket(&self) -> BucketKey {
        self.shared.sink.lock().bucket().clone()
    }

    /// Sequence index of the file the next write lands in.
    pub fn current_sequence(&self) -> u32 {
        self.shared.sink.lock().sequence()
    }
}

impl Drop for Logger {
    /// Signal the exit flag and join the workers. The flush worker drains
    /// every record queued before this point; records submitted
    /// concurrently with the drop are best-effort.
    fn drop(&mut self) {
        self.shared.exit.store(true, Ordering::SeqCst);
        if let Some(handle) = self.flush_handle.take() {
            let _ = handle.join();
        }
        if let Some(handle) = self.maintenance_handle.take() {
            let _ = handle.join();
        }
    }
}

fn spawn_worker(
    name: &'static str,
    shared: Arc<Shared>,
    body: fn(Arc<Shared>),
) -> Result<JoinHandle<()>, ConfigError> {
    thread::Builder::new()
        .name(name.to_string())
        .spawn(move || body(shared))
        .map_err(|source| ConfigError::SpawnThread { name, source })
}
