// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! logroll: an asynchronous, rotating, retention-managed file logger.
//!
//! [`Logger`] accepts records from arbitrary caller threads, buffers them
//! under load (async mode), splits output across files by time bucket and
//! by size, and prunes files older than a retention window. Failures never
//! propagate into caller code: a record that cannot be written is dropped
//! and surfaced on the `tracing` diagnostic stream only.
//!
//! ```no_run
//! use logroll::{LogLevel, Logger, LoggerConfig};
//!
//! let logger = Logger::new(
//!     LoggerConfig::new("logs")
//!         .with_level(LogLevel::Debug)
//!         .with_async(true),
//! )?;
//! logger.log(LogLevel::Info, "service started");
//! logroll::log_fmt!(logger, LogLevel::Warning, "retry {} of {}", 2, 5);
//! # Ok::<(), logroll::ConfigError>(())
//! ```
//!
//! Dropping the logger joins the background workers; every record
//! submitted before the drop began is written first. Records submitted
//! concurrently with the drop are best-effort: do not log from teardown
//! code that may run after the logger's own shutdown starts.

mod config;
mod logger;
pub mod process_logger;
mod queue;
mod worker;

pub use config::LoggerConfig;
pub use logger::{ConfigError, Logger};
pub use logroll_core::{
    BucketKey, Clock, FakeClock, LevelParseError, LogLevel, Rotation, SystemClock,
};

/// Format-and-log convenience wrapper around [`Logger::log_fmt`].
///
/// Packs the arguments into the `&[&dyn Display]` slice the method takes:
///
/// ```ignore
/// log_fmt!(logger, LogLevel::Info, "user {} connected from {}", user, addr);
/// ```
#[macro_export]
macro_rules! log_fmt {
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_fmt($level, $template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}
