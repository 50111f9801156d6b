//! Level filtering: records below the threshold leave no trace.

use crate::prelude::*;
use logroll::{LogLevel, Logger, LoggerConfig};
use tempfile::TempDir;

#[test]
fn records_below_the_threshold_produce_no_output() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::new(
        LoggerConfig::new(dir.path()).with_level(LogLevel::Warning),
    )
    .unwrap();

    logger.log(LogLevel::Debug, "dropped debug");
    logger.log(LogLevel::Info, "dropped info");
    logger.log(LogLevel::Warning, "kept warning");
    logger.log(LogLevel::Error, "kept error");
    drop(logger);

    let lines = read_all_lines(dir.path());
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(" WARNING] "));
    assert_eq!(message_of(&lines[0]), "kept warning");
    assert_eq!(message_of(&lines[1]), "kept error");
}

#[test]
fn empty_messages_are_dropped_before_formatting() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::new(LoggerConfig::new(dir.path())).unwrap();

    logger.log(LogLevel::Error, "");
    drop(logger);

    assert!(list_log_files(dir.path()).is_empty());
}

#[test]
fn set_level_applies_to_subsequent_calls() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::new(LoggerConfig::new(dir.path())).unwrap();

    logger.log(LogLevel::Debug, "filtered out");
    assert_eq!(logger.level(), LogLevel::Info);

    logger.set_level(LogLevel::Debug);
    logger.log(LogLevel::Debug, "now visible");
    drop(logger);

    let lines = read_all_lines(dir.path());
    assert_eq!(lines.len(), 1);
    assert_eq!(message_of(&lines[0]), "now visible");
}

#[test]
fn formatted_records_respect_the_threshold() {
    let dir = TempDir::new().unwrap();
    let logger = Logger::new(
        LoggerConfig::new(dir.path()).with_level(LogLevel::Error),
    )
    .unwrap();

    logroll::log_fmt!(logger, LogLevel::Info, "{} filtered", "cheaply");
    logroll::log_fmt!(logger, LogLevel::Error, "attempt {} failed", 3);
    drop(logger);

    let lines = read_all_lines(dir.path());
    assert_eq!(lines.len(), 1);
    assert_eq!(message_of(&lines[0]), "attempt 3 failed");
}
