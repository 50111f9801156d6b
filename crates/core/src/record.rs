// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log record formatting.

use crate::level::LogLevel;
use crate::time_fmt::format_timestamp;
use chrono::{DateTime, Local};

/// Render the on-disk form of a record: `[<timestamp> <LEVEL>] <message>`.
///
/// Once formatted, a record is an immutable byte sequence; ownership moves
/// from the caller through the queue to the sink writer.
pub fn format_record(now: DateTime<Local>, level: LogLevel, message: &str) -> String {
    format!("[{} {}] {}", format_timestamp(now), level.as_str(), message)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
