//! HuggingFace Inference API text-generation types.

use serde::{Deserialize, Serialize};

use crate::options::GenerationOptions;

/// Request to the HuggingFace Inference API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    /// Input prompt text.
    pub inputs: String,
    /// Generation parameters. Serialized as `{}` when nothing is set.
    pub parameters: GenerateParameters,
}

impl GenerateRequest {
    /// Create a new generate request.
    pub fn new(inputs: impl Into<String>) -> Self {
        Self {
            inputs: inputs.into(),
            parameters: GenerateParameters::default(),
        }
    }

    /// Set generation parameters.
    #[must_use]
    pub fn with_parameters(mut self, params: GenerateParameters) -> Self {
        self.parameters = params;
        self
    }
}

/// Wire parameters: only explicitly set, non-zero options.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerateParameters {
    /// Maximum number of new tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_new_tokens: Option<u32>,
    /// Top-k sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    /// Top-p (nucleus) sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Temperature for sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl GenerateParameters {
    /// Map generation options to wire parameters.
    ///
    /// `length` becomes `max_new_tokens`; the sampling options keep their
    /// names. Unset and zero values are omitted.
    pub fn from_options(options: &GenerationOptions) -> Self {
        Self {
            max_new_tokens: options.length.filter(|n| *n != 0),
            top_k: options.top_k.filter(|k| *k != 0),
            top_p: options.top_p.filter(|p| *p != 0.0),
            temperature: options.temperature.filter(|t| *t != 0.0),
        }
    }

    /// Check if no parameter is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Single generation result.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResult {
    /// Generated text.
    pub generated_text: String,
}

/// Response from the HuggingFace Inference API: one result per sequence.
pub type GenerateResponse = Vec<GenerationResult>;

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct HuggingFaceError {
    /// Error message.
    pub error: String,
    /// Seconds until a loading model is ready.
    #[serde(default)]
    pub estimated_time: Option<f64>,
}
