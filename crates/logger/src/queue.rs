// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record queue for async mode.
//!
//! Draining swaps the internal buffer for an empty one, so the lock is
//! held O(1) regardless of queue length and no record is ever written
//! twice or lost between drains.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Queue length that forces an early drain regardless of the interval.
pub(crate) const HIGH_WATER_MARK: usize = 100_000;

/// FIFO of formatted records guarded by one lock.
pub(crate) struct RecordQueue {
    inner: Mutex<Inner>,
    high_water: usize,
    flush_interval: Duration,
}

struct Inner {
    records: VecDeque<String>,
    last_drain: Instant,
}

impl RecordQueue {
    pub fn new(flush_interval: Duration) -> Self {
        Self::with_high_water(flush_interval, HIGH_WATER_MARK)
    }

    pub fn with_high_water(flush_interval: Duration, high_water: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: VecDeque::new(),
                last_drain: Instant::now(),
            }),
            high_water,
            flush_interval,
        }
    }

    /// Append a record. Blocks only for the queue lock, never for I/O.
    pub fn push(&self, record: String) {
        self.inner.lock().records.push_back(record);
    }

    /// Take every queued record if the size or time threshold is hit,
    /// otherwise leave the queue untouched and return nothing.
    pub fn drain_if_due(&self) -> VecDeque<String> {
        let mut inner = self.inner.lock();
        if inner.records.len() >= self.high_water
            || inner.last_drain.elapsed() >= self.flush_interval
        {
            inner.last_drain = Instant::now();
            std::mem::take(&mut inner.records)
        } else {
            VecDeque::new()
        }
    }

    /// Take every queued record unconditionally (shutdown path).
    pub fn drain_all(&self) -> VecDeque<String> {
        let mut inner = self.inner.lock();
        inner.last_drain = Instant::now();
        std::mem::take(&mut inner.records)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
