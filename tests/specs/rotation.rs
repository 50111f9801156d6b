//! Size-triggered rotation inside one bucket.

use crate::prelude::*;
use logroll::{FakeClock, LogLevel, Logger, LoggerConfig, Rotation};
use std::sync::Arc;
use tempfile::TempDir;

// With the clock pinned, every INFO record has a 31-byte prefix; a
// 20-byte message gives a 51-byte line, accounted as 52 with the newline.
const LINE_COST: u64 = 52;

#[test]
fn exceeding_the_ceiling_splits_output_across_files() {
    let dir = TempDir::new().unwrap();
    let clock = Arc::new(FakeClock::new(fixed_time()));
    let logger = Logger::with_clock(
        LoggerConfig::new(dir.path())
            .with_rotation(Rotation::Daily)
            .with_max_file_bytes(5 * LINE_COST),
        clock,
    )
    .unwrap();

    let message = "a".repeat(20);
    for _ in 0..10 {
        logger.log(LogLevel::Info, &message);
    }
    drop(logger);

    let files = list_log_files(dir.path());
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["20240101_0.log", "20240101_1.log"]);

    for path in &files {
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().count(), 5);
        // No file exceeds the ceiling by more than one record.
        assert!(std::fs::metadata(path).unwrap().len() <= 5 * LINE_COST);
    }
}

#[test]
fn no_single_file_grows_past_the_ceiling_by_more_than_one_record() {
    let dir = TempDir::new().unwrap();
    let clock = Arc::new(FakeClock::new(fixed_time()));
    let max_file_bytes = 120;
    let logger = Logger::with_clock(
        LoggerConfig::new(dir.path()).with_max_file_bytes(max_file_bytes),
        clock,
    )
    .unwrap();

    // Uneven message sizes so rotation points fall mid-file.
    for i in 0..20u32 {
        logger.log(LogLevel::Info, &"x".repeat(10 + (i as usize % 7)));
    }
    drop(logger);

    let files = list_log_files(dir.path());
    assert!(files.len() >= 2);
    for path in files {
        let size = std::fs::metadata(&path).unwrap().len();
        let longest_line = 31 + 16 + 1;
        assert!(size <= max_file_bytes + longest_line);
    }
}
