// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock abstraction.
//!
//! Bucket rollover and the daily retention gate both depend on the current
//! time; injecting the clock makes those paths deterministic in tests.

use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Current local time.
    fn now(&self) -> DateTime<Local>;

    /// Current time as a [`SystemTime`], comparable against file
    /// modification timestamps.
    fn system_now(&self) -> SystemTime;

    /// Milliseconds since the Unix epoch.
    fn epoch_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Production clock reading the OS time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn system_now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Settable clock for tests.
pub struct FakeClock {
    now: Mutex<DateTime<Local>>,
}

impl FakeClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Replace the current time.
    pub fn set(&self, now: DateTime<Local>) {
        *self.now.lock() = now;
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let delta =
            chrono::Duration::from_std(by).unwrap_or_else(|_| chrono::Duration::zero());
        let mut now = self.now.lock();
        *now = *now + delta;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock()
    }

    fn system_now(&self) -> SystemTime {
        let millis = self.now().timestamp_millis().max(0) as u64;
        UNIX_EPOCH + Duration::from_millis(millis)
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
