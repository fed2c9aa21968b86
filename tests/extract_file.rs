//! Integration tests for the file-backed extraction entry point.

use std::io::Write;

use roster_rs::{ExtractError, extract_from_path};
use tempfile::NamedTempFile;

#[test]
fn test_extract_from_real_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Ada Lovelace 1815-12-10").unwrap();
    writeln!(file, "Alan Turing 1912-06-23").unwrap();
    writeln!(file, "Prince").unwrap();

    let batch = extract_from_path(file.path()).unwrap();

    assert_eq!(batch.names(), vec!["Ada Lovelace", "Alan Turing"]);
    assert_eq!(batch.remainders(), vec!["1815-12-10", "1912-06-23"]);
}

#[test]
fn test_extract_from_empty_file() {
    let file = NamedTempFile::new().unwrap();
    let batch = extract_from_path(file.path()).unwrap();
    assert!(batch.is_empty());
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("DOB.txt");

    let err = extract_from_path(&missing).unwrap_err();
    match err {
        ExtractError::ReadInput { path, .. } => assert_eq!(path, missing),
        other => panic!("Expected ReadInput, got: {other:?}"),
    }
}

#[test]
fn test_same_file_parses_identically_twice() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Grace Hopper 1906-12-09").unwrap();
    writeln!(file, "Solo").unwrap();

    let first = extract_from_path(file.path()).unwrap();
    let second = extract_from_path(file.path()).unwrap();
    assert_eq!(first, second);
}
