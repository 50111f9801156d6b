//! Test helpers for the logger specs.

#![allow(dead_code)]

use chrono::TimeZone;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Polling cadence while waiting on the background workers.
pub const POLL_INTERVAL_MS: u64 = 10;

/// Upper bound on any single wait; the maintenance tick is 500ms, so this
/// leaves generous slack.
pub const WAIT_MAX_MS: u64 = 5_000;

/// Poll `pred` until it holds or the spec timeout elapses.
pub fn wait_until(pred: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_millis(WAIT_MAX_MS);
    while Instant::now() < deadline {
        if pred() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
    }
    pred()
}

/// Fixed local instant for clock-driven specs: 2024-01-01 12:00:00.
pub fn fixed_time() -> chrono::DateTime<chrono::Local> {
    chrono::Local
        .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .unwrap()
}

/// Log files under `dir`, ordered by (bucket, sequence).
pub fn list_log_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<(String, u32, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(dir).unwrap() {
        let entry = entry.unwrap();
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some((bucket, sequence)) = logroll_storage::parse_log_filename(&name) {
            files.push((bucket.as_str().to_string(), sequence, entry.path()));
        }
    }
    files.sort();
    files.into_iter().map(|(_, _, path)| path).collect()
}

/// All lines across every log file under `dir`, in (bucket, sequence,
/// line) order.
pub fn read_all_lines(dir: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    for path in list_log_files(dir) {
        let content = std::fs::read_to_string(&path).unwrap();
        lines.extend(content.lines().map(|l| l.to_string()));
    }
    lines
}

/// The message part of a record line (after the `[timestamp LEVEL] `
/// prefix).
pub fn message_of(line: &str) -> &str {
    line.split_once("] ").map(|(_, message)| message).unwrap_or(line)
}
