//! Translation source error types.
//!
//! Both variants are fatal for a session: the CLI prints them and exits
//! with a non-zero status.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a translation source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file does not exist.
    #[error("dictionary file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The source file exists but could not be read.
    #[error("failed to read dictionary file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be split into a phrase group and a translation group.
    #[error("malformed record in {} at line {line}: {reason}", path.display())]
    Format {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}
