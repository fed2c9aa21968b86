//! # roster-rs
//!
//! A line-oriented record extraction library for flat name rosters.
//!
//! Each input line encodes one record of the shape
//! `<firstName> <lastName> <freeTextRemainder>`: two whitespace-delimited
//! name tokens followed by arbitrary free text (typically a birth date).
//! The extractor splits each line into a structured [`Record`] and collects
//! the results into a [`RecordBatch`] that preserves input order.
//!
//! Lines that do not decompose into three segments are dropped silently;
//! this mirrors the source material's behavior, where a single-token line
//! produces no record and a multi-word first name collapses into the
//! remainder field.
//!
//! ## Example
//!
//! ```
//! use roster_rs::extract_from_str;
//!
//! let input = "Ada Lovelace 1815-12-10\nAlan Turing 1912-06-23\nPrince";
//!
//! let batch = extract_from_str(input);
//!
//! assert_eq!(batch.names(), vec!["Ada Lovelace", "Alan Turing"]);
//! assert_eq!(batch.remainders(), vec!["1815-12-10", "1912-06-23"]);
//! ```

pub mod error;
pub mod extract;
pub mod record;

pub use error::ExtractError;
pub use extract::{
    extract_from_path, extract_from_reader, extract_from_str, extract_lines, split_line,
};
pub use record::{Record, RecordBatch};
