//! Plugin error type.

use llm_hf_models::ModelError;
use llm_hf_registry::RegistryError;
use std::io;
use thiserror::Error;

/// Errors surfaced to the host by the plugin entry points.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Model list could not be read or written.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Models could not be built.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Command output could not be written.
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;
