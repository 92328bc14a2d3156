//! Error types for the disc manifest system.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from parsing the binary key-value header (`PARAM.SFO`).
///
/// All variants are structural: the buffer cannot be interpreted as a header
/// at all. Callers that only want metadata treat any of these as "no metadata
/// available" and fall back to placeholder text.
#[derive(Debug, Error)]
pub enum SfoFormatError {
    #[error("header too short: {actual} bytes, need at least {min}")]
    TooShort { actual: usize, min: usize },

    #[error("bad magic signature: {0:02x?}")]
    BadMagic([u8; 4]),

    #[error("entry table for {count} entries extends past end of buffer")]
    EntryTableOutOfRange { count: u32 },

    #[error("key offset {offset} for entry {index} is out of range")]
    KeyOutOfRange { index: u32, offset: usize },

    #[error("key for entry {index} is not NUL-terminated")]
    UnterminatedKey { index: u32 },

    #[error("data range {offset}..{end} for key {key:?} is out of range")]
    DataOutOfRange {
        key: String,
        offset: usize,
        end: usize,
    },
}

/// Errors that abort a manifest build.
///
/// Per-file digest failures are not here: they are isolated into the
/// corresponding manifest entry. Only a root that cannot be enumerated at all
/// is a hard failure.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to enumerate {root:?}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
