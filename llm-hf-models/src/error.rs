//! Model-related error types.
//!
//! Upstream HTTP failures and transport failures are not errors here: they
//! come back as [`NoResult`](crate::response::NoResult) so the host can
//! render "no output" instead of aborting.

use llm_hf_registry::RegistryError;
use thiserror::Error;

/// Model-related errors.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Configuration error, e.g. no credential could be resolved.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generation options outside their valid range.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Success status, but the body is not the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(String),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The model list could not be read.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl ModelError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an invalid options error.
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions(message.into())
    }

    /// Create an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Create an HTTP client error.
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http(message.into())
    }
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
