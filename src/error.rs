//! Error types for the extraction entry points.
//!
//! Shape mismatches are not errors: a line that does not split into three
//! segments is dropped by the extractor without raising anything. The only
//! failures surfaced here are resource failures from the file and reader
//! entry points, which are fatal and propagate to the caller.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input file does not exist or cannot be read.
    #[error("cannot read input file '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A stream-backed source failed mid-read.
    #[error("I/O error reading input: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
