//! Error types for blobgen CLI operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Specialized `Result` type for blobgen CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for blobgen CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to create output file
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Output file already exists
    #[error("{}: Output file already exists. Use --force to overwrite.", path.display())]
    OutputExists {
        /// Path to the existing file
        path: PathBuf,
    },

    /// Failed to move a finished temporary file into place
    #[error("{}: Cannot persist generated payload: {source}", path.display())]
    PersistOutput {
        /// Final path of the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Generation failed in the core engine
    #[error(transparent)]
    Generation(#[from] blobgen_core::Error),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match &err {
            Error::OutputExists { .. } => io::ErrorKind::AlreadyExists,
            Error::CreateOutput { source, .. } | Error::PersistOutput { source, .. } => {
                // Preserve the original error kind
                source.kind()
            }
            Error::Generation(source) => match source {
                blobgen_core::Error::Io(io_err) => io_err.kind(),
                blobgen_core::Error::AllocationFailed { .. } => io::ErrorKind::OutOfMemory,
                _ => io::ErrorKind::InvalidInput,
            },
        };
        io::Error::new(kind, err)
    }
}
