//! Async mode: queueing, interval drains, and drain-on-shutdown
//! completeness.

use crate::prelude::*;
use logroll::{LogLevel, Logger, LoggerConfig};
use tempfile::TempDir;

#[test]
fn shutdown_drains_every_record_queued_before_it() {
    let dir = TempDir::new().unwrap();
    // A one-minute interval keeps the periodic drain out of the picture:
    // only the shutdown drain can write these records.
    let logger = Logger::new(
        LoggerConfig::new(dir.path())
            .with_async(true)
            .with_flush_interval_secs(60),
    )
    .unwrap();

    for i in 0..1000 {
        logger.log(LogLevel::Info, &format!("queued-{i}"));
    }
    drop(logger);

    let messages: Vec<String> = read_all_lines(dir.path())
        .iter()
        .map(|line| message_of(line).to_string())
        .collect();
    let expected: Vec<String> = (0..1000).map(|i| format!("queued-{i}")).collect();
    assert_eq!(messages, expected);
}

#[test]
fn interval_drains_write_without_a_shutdown() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::new(
        LoggerConfig::new(dir.path())
            .with_async(true)
            .with_flush_interval_secs(0),
    )
    .unwrap();

    logger.log(LogLevel::Info, "written while running");

    let dir_path = dir.path().to_path_buf();
    assert!(wait_until(|| {
        read_all_lines(&dir_path)
            .iter()
            .any(|line| message_of(line) == "written while running")
    }));
    drop(logger);
}

#[test]
fn producers_never_observe_write_errors() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::new(
        LoggerConfig::new(dir.path())
            .with_async(true)
            .with_flush_interval_secs(60),
    )
    .unwrap();

    // Queueing is decoupled from the sink: even with the directory gone,
    // the producer-side call stays a cheap, infallible push.
    std::fs::remove_dir_all(dir.path()).unwrap();
    logger.log(LogLevel::Info, "queued into the void");
    drop(logger);
}
