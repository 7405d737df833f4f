use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::stats::{Aggregator, SkippedFile};

#[test]
fn no_config_flag_gives_defaults() {
    let config = load_config(Some(Path::new("/definitely/missing.toml")), true).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn explicit_config_path_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[count]\nthreshold = 3\n").unwrap();

    let config = load_config(Some(&path), false).unwrap();
    assert_eq!(config.count.threshold, 3);
}

#[test]
fn missing_explicit_config_is_error() {
    let dir = TempDir::new().unwrap();
    let result = load_config(Some(&dir.path().join("missing.toml")), false);
    assert!(result.is_err());
}

#[test]
fn write_report_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");

    write_report(Some(&path), "Total number of files: 1\n", true).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "Total number of files: 1\n");
}

#[test]
fn write_report_truncates_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");
    std::fs::write(&path, "old content that is longer").unwrap();

    write_report(Some(&path), "new", false).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn write_report_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("report.txt");
    assert!(write_report(Some(&path), "x", false).is_err());
}

#[test]
fn exit_code_success_without_skips() {
    let report = RunReport::new(PathBuf::from("."), Aggregator::default().finalize(), vec![]);
    assert_eq!(exit_code_for(&report, true), EXIT_SUCCESS);
}

#[test]
fn exit_code_signals_skipped_files() {
    let skipped = vec![SkippedFile {
        path: PathBuf::from("bad.txt"),
        reason: "invalid".to_string(),
    }];
    let report = RunReport::new(PathBuf::from("."), Aggregator::default().finalize(), skipped);
    assert_eq!(exit_code_for(&report, true), EXIT_FILES_SKIPPED);
}
