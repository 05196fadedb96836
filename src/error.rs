//! Error types for loading a wordlist and building words.
//!
//! Failures are values; nothing here panics across the public API.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while filling a `Dictionary` from a wordlist.
///
/// Unless `LoadOptions::rollback_on_error` is set, the variants raised
/// mid-stream (`AllocationFailure`, `OversizedToken`, `Read`) leave every
/// entry inserted before the failure in the table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The wordlist could not be opened; the table was not touched.
    #[error("could not open {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Storage for a new entry could not be obtained.
    #[error("allocation failed after {loaded} words")]
    AllocationFailure { loaded: usize },

    /// A token exceeded the word-length capacity.
    #[error("token {index} is {len} bytes, exceeding the {max}-byte word capacity")]
    OversizedToken { index: usize, len: usize, max: usize },

    /// Reading failed after the source was opened.
    #[error("read error: {0}")]
    Read(#[from] io::Error),

    /// The table already holds a wordlist; unload it first.
    #[error("dictionary already loaded with {size} words")]
    AlreadyLoaded { size: usize },
}

/// Rejection reasons for `Word::new`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum WordError {
    #[error("empty word")]
    Empty,

    #[error("word is {len} bytes, exceeding the {max}-byte capacity")]
    TooLong { len: usize, max: usize },

    /// The word copy could not be allocated.
    #[error("allocation failed")]
    Alloc,
}
