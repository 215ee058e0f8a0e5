//! Registry error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing the model list.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The list file exists but could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File the operation touched.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Identifier is empty or contains whitespace.
    #[error("Invalid model identifier: {0:?}")]
    InvalidIdentifier(String),

    /// No per-user directory could be determined.
    #[error("Could not determine the user directory; set LLM_USER_PATH")]
    NoUserDir,
}

impl RegistryError {
    /// Create an I/O error for a path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier(id: impl Into<String>) -> Self {
        Self::InvalidIdentifier(id.into())
    }
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
