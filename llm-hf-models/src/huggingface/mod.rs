//! HuggingFace Inference API support.
//!
//! Each subscribed identifier becomes a [`HuggingFaceModel`] posting to
//! `https://api-inference.huggingface.co/models/<identifier>`.
//!
//! ## Example
//!
//! ```ignore
//! use llm_hf_models::huggingface::HuggingFaceModel;
//! use llm_hf_models::{EnvKeySource, GenerationOptions, HuggingFaceConfig, Model};
//!
//! let model = HuggingFaceModel::new("bigscience/bloom", &EnvKeySource, &HuggingFaceConfig::default())?;
//! let result = model.prompt("The meaning of life is", &GenerationOptions::new().length(20)).await?;
//! ```
//!
//! ## Environment Variables
//!
//! - `LLM_HUGGINGFACE_KEY`: API token, used when the host has no stored
//!   key for `huggingface`

pub mod client;
pub mod model;
pub mod types;

pub use client::InferenceClient;
pub use model::{endpoint_url, HuggingFaceModel, HF_INFERENCE_URL, MODEL_ID_PREFIX};
pub use types::{GenerateParameters, GenerateRequest, GenerateResponse, GenerationResult};
