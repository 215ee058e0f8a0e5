//! Plugin entry points called from the host's startup sequence.

use std::io::Write;
use std::sync::Arc;

use llm_hf_models::{HuggingFaceConfig, KeySource, ModelFactory};
use llm_hf_registry::{FileModelRegistry, ModelRegistry};

use crate::catalog::ModelSink;
use crate::commands::{self, HfCommand};
use crate::error::PluginResult;

/// The HuggingFace plugin: a model list, a key source and a configuration.
pub struct HuggingFacePlugin {
    registry: Arc<dyn ModelRegistry>,
    keys: Arc<dyn KeySource>,
    config: HuggingFaceConfig,
}

impl HuggingFacePlugin {
    /// Create a plugin from its collaborators.
    pub fn new(
        registry: Arc<dyn ModelRegistry>,
        keys: Arc<dyn KeySource>,
        config: HuggingFaceConfig,
    ) -> Self {
        Self {
            registry,
            keys,
            config,
        }
    }

    /// Create a plugin reading `hf_models.txt` from the user directory.
    pub fn from_user_dir(
        keys: Arc<dyn KeySource>,
        config: HuggingFaceConfig,
    ) -> PluginResult<Self> {
        let registry = FileModelRegistry::in_user_dir()?;
        Ok(Self::new(Arc::new(registry), keys, config))
    }

    /// The model list.
    pub fn registry(&self) -> &dyn ModelRegistry {
        self.registry.as_ref()
    }

    /// Register one model per subscribed identifier.
    ///
    /// Nothing is registered if the credential is missing. Returns the
    /// number of models registered.
    pub fn register_models(&self, sink: &mut dyn ModelSink) -> PluginResult<usize> {
        let factory = ModelFactory::new(
            Arc::clone(&self.registry),
            Arc::clone(&self.keys),
            self.config.clone(),
        );
        let models = factory.build_all()?;
        let count = models.len();
        for model in models {
            tracing::info!(model_id = %model.identifier(), "Registering HuggingFace model");
            sink.register(Arc::new(model));
        }
        Ok(count)
    }

    /// Run an `hf` sub-command.
    pub fn run(&self, command: &HfCommand, out: &mut dyn Write) -> PluginResult<()> {
        commands::run(command, self.registry.as_ref(), out)
    }
}

impl std::fmt::Debug for HuggingFacePlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFacePlugin")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
