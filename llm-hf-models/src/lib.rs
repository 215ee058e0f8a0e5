//! # llm-hf-models
//!
//! HuggingFace-hosted text-generation models for the `llm` host.
//!
//! Every identifier in the model list becomes a [`HuggingFaceModel`] that
//! posts the prompt to the HuggingFace Inference API and returns the first
//! `generated_text`:
//!
//! - [`ModelFactory`] reads the registry and builds the models, resolving
//!   the credential up front
//! - [`GenerateParameters::from_options`] maps [`GenerationOptions`] to
//!   wire parameters
//! - [`InferenceClient`] performs the HTTP round-trip
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use llm_hf_models::{EnvKeySource, GenerationOptions, HuggingFaceConfig, Model, ModelFactory};
//! use llm_hf_registry::FileModelRegistry;
//!
//! let factory = ModelFactory::new(
//!     Arc::new(FileModelRegistry::in_user_dir()?),
//!     Arc::new(EnvKeySource),
//!     HuggingFaceConfig::default(),
//! );
//! for model in factory.build_all()? {
//!     let result = model.prompt("Hello", &GenerationOptions::default()).await?;
//!     println!("{model}: {:?}", result.text());
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod factory;
pub mod huggingface;
pub mod key;
pub mod mock;
pub mod model;
pub mod options;
pub mod response;

pub use config::HuggingFaceConfig;
pub use error::{ModelError, ModelResult};
pub use factory::ModelFactory;
pub use huggingface::{
    endpoint_url, GenerateParameters, GenerateRequest, HuggingFaceModel, InferenceClient,
    HF_INFERENCE_URL,
};
pub use key::{
    resolve_credential, Credential, EnvKeySource, KeySource, StaticKeySource, KEY_ENV_VAR,
    PROVIDER_NAME,
};
pub use mock::MockModel;
pub use model::{BoxedModel, Model, ResponseStream};
pub use options::GenerationOptions;
pub use response::{InferenceResult, NoResult};
