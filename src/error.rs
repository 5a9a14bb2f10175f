//! Error types for RTF parsing.

use thiserror::Error;

/// Result type for RTF operations.
pub type RtfResult<T> = Result<T, RtfError>;

/// RTF parsing errors.
#[derive(Error, Debug)]
pub enum RtfError {
    /// A control word carried a suffix that is not a valid integer parameter.
    ///
    /// The tokenizer recovers from this locally by dropping the control word,
    /// so it never escapes [`crate::parse`].
    #[error("Malformed control word: {0}")]
    MalformedControlWord(String),

    /// A group was closed without being opened, or left open at end of input.
    #[error("Unbalanced groups: {0}")]
    UnbalancedGroup(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Structural dump failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
