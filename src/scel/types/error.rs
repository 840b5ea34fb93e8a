//! Custom error types for the scel2ibus crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant aborts the conversion of the current file. Nothing is
/// written for a file that fails.
#[derive(Debug, Error)]
pub enum ScelError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The buffer ended before a required field.
    #[error("Truncated input at offset {offset:#x}: need {needed} bytes, only {remaining} remain")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// Bytes that do not decode as UTF-16LE text.
    #[error("Invalid UTF-16LE text at offset {offset:#x} ({len} bytes)")]
    InvalidEncoding { offset: usize, len: usize },

    /// A frequency field that is not a non-negative integer.
    #[error("Invalid frequency {value:?} in entry {index}")]
    InvalidFrequency { index: usize, value: String },

    /// An entry whose structure is inconsistent.
    #[error("Malformed entry {index} at offset {offset:#x}: {reason}")]
    MalformedEntry {
        index: usize,
        offset: usize,
        reason: String,
    },

    /// The pinyin table is structurally invalid.
    #[error("Malformed pinyin table: {0}")]
    MalformedTable(String),

    /// An entry references a pinyin index the table does not define.
    #[error("Entry {entry} ({word}) references unknown pinyin index {pinyin_index}")]
    UnknownPinyinIndex {
        entry: usize,
        word: String,
        pinyin_index: u16,
    },

    /// The file does not start with the .scel signature.
    #[error("Invalid .scel signature: {found:02x?}")]
    InvalidSignature { found: Vec<u8> },

    /// The input file exceeds the configured size limit.
    #[error("Input {path} is {size} bytes, limit is {limit} bytes")]
    InputTooLarge { path: PathBuf, size: u64, limit: u64 },

    /// The output path names the input file itself.
    #[error("Output would overwrite input {0}")]
    OutputIsInput(PathBuf),

    /// Two inputs map to the same output path.
    #[error("Output {output} is already produced from {first}")]
    DuplicateOutput { output: PathBuf, first: PathBuf },

    /// The output file already exists and overwriting is disabled.
    #[error("Output {0} already exists")]
    OutputExists(PathBuf),
}

/// A convenience `Result` type alias using the crate's `ScelError` type.
pub type Result<T> = std::result::Result<T, ScelError>;
