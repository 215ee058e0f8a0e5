//! Generation options accepted by HuggingFace models.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Options a prompt may carry. Every field is optional.
///
/// Unset and zero-valued fields are left out of the request entirely, so
/// `temperature: Some(0.0)` behaves exactly like `temperature: None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Maximum number of new tokens to generate.
    pub length: Option<u32>,
    /// Top-k sampling.
    pub top_k: Option<u32>,
    /// Top-p (nucleus) sampling, in (0, 1].
    pub top_p: Option<f64>,
    /// Sampling temperature, non-negative.
    pub temperature: Option<f64>,
}

impl GenerationOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of new tokens.
    #[must_use]
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Set top-k.
    #[must_use]
    pub fn top_k(mut self, k: u32) -> Self {
        self.top_k = Some(k);
        self
    }

    /// Set top-p.
    #[must_use]
    pub fn top_p(mut self, p: f64) -> Self {
        self.top_p = Some(p);
        self
    }

    /// Set temperature.
    #[must_use]
    pub fn temperature(mut self, t: f64) -> Self {
        self.temperature = Some(t);
        self
    }

    /// Reject values that would be sent but are out of range.
    ///
    /// Zero values are never sent, so they always pass.
    pub fn validate(&self) -> ModelResult<()> {
        if let Some(p) = self.top_p.filter(|p| *p != 0.0) {
            if !(p > 0.0 && p <= 1.0) {
                return Err(ModelError::invalid_options(format!(
                    "top_p must be in (0, 1], got {p}"
                )));
            }
        }
        if let Some(t) = self.temperature.filter(|t| *t != 0.0) {
            if !(t > 0.0 && t.is_finite()) {
                return Err(ModelError::invalid_options(format!(
                    "temperature must be a non-negative number, got {t}"
                )));
            }
        }
        Ok(())
    }
}
