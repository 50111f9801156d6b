// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp rendering for record prefixes.

use chrono::{DateTime, Local};

/// Millisecond-resolution timestamp used in record prefixes:
/// `2024-01-01 12:00:00.000`.
pub fn format_timestamp(t: DateTime<Local>) -> String {
    t.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/// Second-resolution timestamp used by the process-wide logger:
/// `2024-01-01 12:00:00`.
pub fn format_timestamp_secs(t: DateTime<Local>) -> String {
    t.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
