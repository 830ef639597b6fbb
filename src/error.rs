//! Error types for word-ladder operations
//!
//! A query with no ladder is not an error; it is `Ok(None)`. Only malformed
//! requests and dictionary I/O failures surface here.

use std::io;

use thiserror::Error;

/// The main error type for the crate
#[derive(Error, Debug)]
pub enum LadderError {
    /// Start and target have different lengths, so no ladder can connect them
    #[error(
        "start word '{start}' has {start_len} letters but target word '{target}' has {target_len}"
    )]
    LengthMismatch {
        start: String,
        start_len: usize,
        target: String,
        target_len: usize,
    },

    /// I/O errors while reading a dictionary
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The dictionary holds no words of the requested length
    #[error("dictionary has no words of length {0}")]
    EmptyDictionary(usize),
}

/// Result type alias for operations that may fail with `LadderError`
pub type Result<T> = std::result::Result<T, LadderError>;

impl LadderError {
    /// Build a length-mismatch error from the two offending words
    #[must_use]
    pub fn length_mismatch(start: &str, target: &str) -> Self {
        Self::LengthMismatch {
            start: start.to_string(),
            start_len: start.chars().count(),
            target: target.to_string(),
            target_len: target.chars().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_message_names_both_words() {
        let err = LadderError::length_mismatch("cat", "horse");
        assert_eq!(
            err.to_string(),
            "start word 'cat' has 3 letters but target word 'horse' has 5"
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: LadderError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, LadderError::Io(_)));
    }
}
