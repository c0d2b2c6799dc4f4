//! Error kinds for splitting and verification.
//!
//! The splitter distinguishes failure kinds so callers can tell "the source
//! could not be opened" apart from "an artifact could not be persisted".
//! A blob with no declaration lines is deliberately NOT an error: it falls
//! back to a single artifact, visible through
//! [`SplitReport::declaration_count`](crate::SplitReport).

use docsplit_core::AppError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while splitting a source blob or verifying a split.
#[derive(Error, Debug)]
pub enum SplitError {
    /// The source blob could not be opened.
    #[error("failed to open source {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from the source blob failed mid-scan.
    #[error("failed to read source {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output artifact could not be created.
    #[error("failed to create artifact {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to an output artifact failed.
    #[error("failed to write artifact {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<SplitError> for AppError {
    fn from(err: SplitError) -> Self {
        AppError::Split(err.to_string())
    }
}

/// Convenience type alias for Results with SplitError.
pub type SplitResult<T> = Result<T, SplitError>;
