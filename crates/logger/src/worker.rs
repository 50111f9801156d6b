// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Background workers: the flush loop (async mode) and the maintenance
//! loop (bucket rollover plus the daily retention sweep).
//!
//! ## Locking
//!
//! ```text
//! producers   ──→ queue lock               (push, O(1))
//! flush       ──→ queue lock, then sink lock (drain, then batch write)
//! maintenance ──→ sink lock                (rollover only)
//! sync writes ──→ sink lock
//! ```
//!
//! The flush worker never holds the queue lock while writing, and the
//! maintenance worker takes only the sink lock, so no lock-ordering cycle
//! exists. Both loops poll the exit flag once per tick; shutdown latency
//! is bounded by one tick plus the write in progress.

use crate::config::LoggerConfig;
use crate::queue::RecordQueue;
use logroll_core::{BucketKey, Clock};
use logroll_storage::{sweep_expired, LogSink};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::warn;

/// Flush worker wake-up tick.
pub(crate) const FLUSH_TICK: Duration = Duration::from_millis(100);

/// Maintenance worker wake-up tick.
pub(crate) const MAINTENANCE_TICK: Duration = Duration::from_millis(500);

/// Gate between retention sweeps.
const SWEEP_PERIOD_MS: i64 = 24 * 60 * 60 * 1000;

/// State shared between producers and the background workers.
pub(crate) struct Shared {
    pub sink: Mutex<LogSink>,
    pub queue: RecordQueue,
    pub level: AtomicU8,
    pub exit: AtomicBool,
    pub clock: Arc<dyn Clock>,
    pub config: LoggerConfig,
}

impl Shared {
    /// Write a batch under one sink lock acquisition.
    ///
    /// A failed write drops that record and is surfaced on the diagnostic
    /// stream only; logging must never crash or stall the application it
    /// instruments.
    pub fn write_batch(&self, batch: VecDeque<String>) {
        if batch.is_empty() {
            return;
        }
        let mut sink = self.sink.lock();
        for record in batch {
            if let Err(e) = sink.write_line(&record) {
                warn!(error = %e, "dropping log record after write failure");
            }
        }
    }
}

/// Flush loop: drain the queue when due and hand the batch to the sink.
///
/// On exit the loop performs one final unconditional drain, so every
/// record queued before shutdown began reaches disk.
pub(crate) fn run_flush(shared: Arc<Shared>) {
    while !shared.exit.load(Ordering::SeqCst) {
        thread::sleep(FLUSH_TICK);
        shared.write_batch(shared.queue.drain_if_due());
    }
    shared.write_batch(shared.queue.drain_all());
}

/// Maintenance loop: rollover detection every tick, retention sweep once
/// at startup and thereafter at most once per 24 hours.
pub(crate) fn run_maintenance(shared: Arc<Shared>) {
    let mut last_sweep = None;
    sweep_once(&shared, &mut last_sweep);

    while !shared.exit.load(Ordering::SeqCst) {
        thread::sleep(MAINTENANCE_TICK);
        roll_if_bucket_changed(&shared);

        let due = match last_sweep {
            Some(at) => shared.clock.epoch_millis().saturating_sub(at) >= SWEEP_PERIOD_MS,
            None => true,
        };
        if due {
            sweep_once(&shared, &mut last_sweep);
        }
    }
}

/// Compare the wall clock's bucket against the sink's and roll when they
/// differ. Runs whether or not a write is pending, so a new bucket's
/// first write lands in `_0`.
fn roll_if_bucket_changed(shared: &Shared) {
    let bucket = BucketKey::current(shared.clock.now(), shared.config.rotation);
    let mut sink = shared.sink.lock();
    if sink.bucket() != &bucket {
        sink.roll_bucket(bucket);
    }
}

/// One retention sweep. The gate advances only on success, so a failed
/// sweep is retried on the next tick.
fn sweep_once(shared: &Shared, last_sweep: &mut Option<i64>) {
    match sweep_expired(
        &shared.config.dir,
        shared.config.retention(),
        shared.clock.system_now(),
    ) {
        Ok(_) => *last_sweep = Some(shared.clock.epoch_millis()),
        Err(e) => {
            warn!(
                dir = %shared.config.dir.display(),
                error = %e,
                "retention sweep failed",
            );
        }
    }
}
