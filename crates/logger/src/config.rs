// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger configuration.

use logroll_core::{LogLevel, Rotation};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Construction parameters for [`Logger`](crate::Logger).
///
/// Every field except the directory has a default, so an embedding
/// application can deserialize a partial table: level `info`, synchronous
/// writes, a 10 second flush interval, hourly rotation, 30 days of
/// retention, 50 MiB files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Directory the log files live in; created at construction.
    pub dir: PathBuf,
    /// Minimum level a record needs to be written.
    #[serde(default = "default_level")]
    pub level: LogLevel,
    /// Queue records and write from a background worker instead of in the
    /// calling thread.
    #[serde(default)]
    pub async_mode: bool,
    /// Seconds between queue drains in async mode.
    #[serde(default = "default_flush_interval_secs")]
    pub flush_interval_secs: u64,
    /// Hourly or daily file buckets.
    #[serde(default)]
    pub rotation: Rotation,
    /// Files older than this many days are pruned by the maintenance
    /// worker.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
    /// Byte ceiling that triggers an in-bucket rotation.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
}

fn default_level() -> LogLevel {
    LogLevel::Info
}

fn default_flush_interval_secs() -> u64 {
    10
}

fn default_retention_days() -> u32 {
    30
}

fn default_max_file_bytes() -> u64 {
    50 * 1024 * 1024
}

impl LoggerConfig {
    /// Configuration with the defaults above for `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            level: default_level(),
            async_mode: false,
            flush_interval_secs: default_flush_interval_secs(),
            rotation: Rotation::default(),
            retention_days: default_retention_days(),
            max_file_bytes: default_max_file_bytes(),
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_async(mut self, async_mode: bool) -> Self {
        self.async_mode = async_mode;
        self
    }

    pub fn with_flush_interval_secs(mut self, secs: u64) -> Self {
        self.flush_interval_secs = secs;
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }

    pub fn with_max_file_bytes(mut self, bytes: u64) -> Self {
        self.max_file_bytes = bytes;
        self
    }

    pub(crate) fn flush_interval(&self) -> Duration {
        Duration::from_secs(self.flush_interval_secs)
    }

    pub(crate) fn retention(&self) -> Duration {
        Duration::from_secs(u64::from(self.retention_days) * 24 * 60 * 60)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
