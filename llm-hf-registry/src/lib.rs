//! # llm-hf-registry
//!
//! The list of HuggingFace models a user has subscribed to.
//!
//! The list is a flat `hf_models.txt` file in the host's per-user
//! directory, one identifier per line, kept sorted ascending:
//!
//! ```rust,ignore
//! use llm_hf_registry::{FileModelRegistry, ModelRegistry};
//!
//! let registry = FileModelRegistry::in_user_dir()?;
//! registry.add("bigscience/bloom")?;
//! for model in registry.load()? {
//!     println!("{model}");
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod file;
pub mod memory;
pub mod paths;
pub mod registry;

pub use error::{RegistryError, RegistryResult};
pub use file::FileModelRegistry;
pub use memory::InMemoryModelRegistry;
pub use paths::{models_file, user_dir, MODELS_FILE_NAME};
pub use registry::{normalize, validate_identifier, ModelRegistry};
