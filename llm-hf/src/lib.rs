//! # llm-hf
//!
//! HuggingFace Inference API plugin for the `llm` command-line tool.
//!
//! The plugin keeps a list of HuggingFace model identifiers the user has
//! subscribed to, manages it through the `hf add|rm|list` commands, and at
//! startup registers one model per identifier with the host.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use llm_hf::{EnvKeySource, GenerationOptions, HuggingFaceConfig, HuggingFacePlugin, Model, ModelCatalog};
//!
//! let plugin = HuggingFacePlugin::from_user_dir(Arc::new(EnvKeySource), HuggingFaceConfig::default())?;
//!
//! let mut catalog = ModelCatalog::new();
//! plugin.register_models(&mut catalog)?;
//!
//! let model = catalog.get("huggingface/bigscience/bloom").unwrap();
//! let result = model.prompt("The meaning of life is", &GenerationOptions::default()).await?;
//! ```
//!
//! ## Crates
//!
//! - [`llm_hf_models`]: models, options, HTTP client, credential lookup
//! - [`llm_hf_registry`]: the persisted model list

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod commands;
pub mod error;
pub mod logging;
pub mod plugin;

pub use catalog::{ModelCatalog, ModelSink};
pub use commands::{HfCommand, GROUP_NAME};
pub use error::{PluginError, PluginResult};
pub use plugin::HuggingFacePlugin;

pub use llm_hf_models::{
    BoxedModel, EnvKeySource, GenerationOptions, HuggingFaceConfig, HuggingFaceModel,
    InferenceResult, KeySource, Model, ModelError, NoResult, StaticKeySource,
};
pub use llm_hf_registry::{FileModelRegistry, ModelRegistry, RegistryError};
