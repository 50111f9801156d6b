// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time-bucket keys for log file naming.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a new time bucket (and with it a new file series) starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    /// One bucket per hour: `YYYYMMDDHH`.
    #[default]
    Hourly,
    /// One bucket per day: `YYYYMMDD`.
    Daily,
}

/// The time window a log file's name encodes.
///
/// `YYYYMMDD` in daily mode, `YYYYMMDDHH` in hourly mode, local time. The
/// key changes exactly once per day or per hour; the maintenance worker is
/// the only writer of the "current bucket" state, and its transition is the
/// sole trigger for a sequence reset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketKey(String);

impl BucketKey {
    /// Bucket key for the given instant.
    pub fn current(now: DateTime<Local>, rotation: Rotation) -> Self {
        let key = match rotation {
            Rotation::Daily => now.format("%Y%m%d").to_string(),
            Rotation::Hourly => now.format("%Y%m%d%H").to_string(),
        };
        BucketKey(key)
    }

    /// Parse a bucket key from a filename component.
    ///
    /// Accepts exactly 8 (daily) or 10 (hourly) ASCII digits.
    pub fn parse(s: &str) -> Option<Self> {
        if (s.len() == 8 || s.len() == 10) && s.bytes().all(|b| b.is_ascii_digit()) {
            Some(BucketKey(s.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "bucket_tests.rs"]
mod tests;
