//! Dictionary error module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading dictionary words.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when a word-list file cannot be read.
    #[error("Failed to read word list {}: {source}", .path.display())]
    ReadError {
        /// The word-list file
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },
}
