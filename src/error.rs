//! Error taxonomy
//!
//! `ConfigError` is fatal and surfaces at startup. `GuessError` rejects a
//! single guess and leaves the game untouched.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the word list data a `WordStore` is built from
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the {0} word list is empty")]
    EmptySource(&'static str),
    #[error("word '{word}' has {actual} letters, expected {expected}")]
    InconsistentLength {
        word: String,
        expected: usize,
        actual: usize,
    },
    #[error("failed to read word list {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reasons a guess is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("the game is already over")]
    InvalidState,
    #[error("guess must be {expected} letters long, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("hard mode: '{0}' is already known to be absent")]
    HardModeViolation(char),
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),
}
