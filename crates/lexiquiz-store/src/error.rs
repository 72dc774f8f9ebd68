//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading or writing per-user files.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file or directory could not be read or written.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored record could not be parsed.
    #[error("malformed record in {} at line {line}: {reason}", path.display())]
    Format {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The username cannot be used to build file names.
    #[error("invalid username: {0}")]
    InvalidUser(String),

    /// A record to be written is not representable in the file format.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
