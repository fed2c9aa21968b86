//! The record extractor: one pass over newline-separated roster lines.
//!
//! Expected line shape:
//! ```text
//! <firstName> <lastName> <freeTextRemainder>
//! ```
//!
//! Splitting rules:
//! - Leading/trailing whitespace on each line is stripped first.
//! - The first two whitespace-delimited tokens become the full name; runs
//!   of whitespace count as a single delimiter.
//! - All text after the second token is the remainder, kept verbatim
//!   (embedded whitespace preserved).
//! - A line yielding fewer than three segments produces no record and is
//!   dropped silently. This means single-token lines vanish, and a
//!   multi-word first name collapses into the remainder field — a known
//!   limitation carried over from the source material.
//!
//! Extraction is a pure transformation with no side effects; parsing the
//! same input twice yields equal batches.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use crate::error::{ExtractError, Result};
use crate::record::{Record, RecordBatch};

/// Split one line into a [`Record`], or `None` on shape mismatch.
pub fn split_line(line: &str) -> Option<Record> {
    let trimmed = line.trim();

    let first_end = trimmed.find(char::is_whitespace)?;
    let first = &trimmed[..first_end];

    let after_first = trimmed[first_end..].trim_start();
    let second_end = after_first.find(char::is_whitespace)?;
    let second = &after_first[..second_end];

    // The line was trimmed, so whatever follows the delimiter run is
    // non-empty text.
    let remainder = after_first[second_end..].trim_start();

    Some(Record::new(format!("{first} {second}"), remainder))
}

/// Extract a batch from any sequence of lines.
///
/// Well-formed lines append one record each, in input order; mismatched
/// lines are skipped without error.
pub fn extract_lines<I>(lines: I) -> RecordBatch
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut batch = RecordBatch::new();
    for line in lines {
        if let Some(record) = split_line(line.as_ref()) {
            batch.push(record);
        }
    }
    batch
}

/// Extract a batch from newline-separated text.
pub fn extract_from_str(input: &str) -> RecordBatch {
    extract_lines(input.lines())
}

/// Extract a batch from a buffered reader, consuming it to exhaustion.
///
/// Read failures propagate; the partially built batch is discarded.
pub fn extract_from_reader<R: BufRead>(reader: R) -> Result<RecordBatch> {
    let mut batch = RecordBatch::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(record) = split_line(&line) {
            batch.push(record);
        }
    }
    Ok(batch)
}

/// Extract a batch from a UTF-8 text file.
///
/// The file handle is scoped to this call and released on every exit path.
/// A missing or unreadable file is fatal and propagates with the path
/// attached; it is never retried here.
pub fn extract_from_path(path: impl AsRef<Path>) -> Result<RecordBatch> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ExtractError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_from_str(&text))
}
