//! Error types and result handling for payload generation.

use std::fmt;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error type covering all failure modes in payload generation.
///
/// All validation errors are raised before the first byte is produced; once
/// generation has started, the only remaining failure mode is a sink write
/// error, which is surfaced unmodified and never retried.
#[derive(Debug)]
pub enum Error {
    /// Size expression that does not match `<number>[ ]?<unit>`.
    InvalidSizeFormat {
        /// The rejected size expression
        input: String,
    },

    /// Size expression with a negative value.
    InvalidSize {
        /// The rejected size expression
        input: String,
    },

    /// Chunk size of zero bytes.
    InvalidChunkSize,

    /// Unrecognized content kind selector.
    InvalidContentKind {
        /// The rejected selector string
        value: String,
    },

    /// Unrecognized binary fill strategy selector.
    InvalidFillStrategy {
        /// The rejected selector string
        value: String,
    },

    /// Custom text pattern with no bytes; an empty pattern cannot tile a chunk.
    EmptyPattern,

    /// Requested chunk template could not be allocated.
    AllocationFailed {
        /// Size in bytes of the template that failed to allocate
        capacity: usize,
    },

    /// I/O failure while writing to or flushing the sink.
    ///
    /// Whatever prefix was already durably written to the destination is left
    /// in place; callers needing atomicity must write to a temporary location
    /// and rename on success.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSizeFormat { input } => {
                write!(f, "invalid size expression '{input}'")
            }
            Error::InvalidSize { input } => {
                write!(f, "size must be non-negative, got '{input}'")
            }
            Error::InvalidChunkSize => write!(f, "chunk size must be greater than zero"),
            Error::InvalidContentKind { value } => {
                write!(f, "unknown content kind '{value}', expected 'text' or 'binary'")
            }
            Error::InvalidFillStrategy { value } => write!(
                f,
                "unknown fill strategy '{value}', expected 'sequential', 'zeros', 'ones' or 'random'",
            ),
            Error::EmptyPattern => write!(f, "text pattern must not be empty"),
            Error::AllocationFailed { capacity } => {
                write!(f, "unable to allocate chunk template of {capacity} bytes")
            }
            Error::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
