//! Builds one model per subscribed identifier.

use std::collections::HashSet;
use std::sync::Arc;

use llm_hf_registry::ModelRegistry;

use crate::config::HuggingFaceConfig;
use crate::error::ModelResult;
use crate::huggingface::{HuggingFaceModel, InferenceClient};
use crate::key::{resolve_credential, KeySource};

/// Turns the persisted model list into live models.
pub struct ModelFactory {
    registry: Arc<dyn ModelRegistry>,
    keys: Arc<dyn KeySource>,
    config: HuggingFaceConfig,
}

impl ModelFactory {
    /// Create a factory.
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

    /// Build a model for every distinct identifier in the registry.
    ///
    /// The credential is resolved once; if it is missing and the registry
    /// is not empty, no model is built at all. All models share one HTTP
    /// client.
    pub fn build_all(&self) -> ModelResult<Vec<HuggingFaceModel>> {
        let mut seen = HashSet::new();
        let identifiers: Vec<String> = self
            .registry
            .load()?
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();
        if identifiers.is_empty() {
            return Ok(Vec::new());
        }

        let credential = resolve_credential(self.keys.as_ref())?;
        let client = InferenceClient::new(&self.config)?;

        let models: Vec<_> = identifiers
            .into_iter()
            .map(|id| {
                HuggingFaceModel::with_parts(
                    id,
                    credential.clone(),
                    client.clone(),
                    &self.config.base_url,
                )
            })
            .collect();
        tracing::debug!(count = models.len(), "Built HuggingFace models");
        Ok(models)
    }
}

impl std::fmt::Debug for ModelFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelFactory")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::key::StaticKeySource;
    use crate::model::Model;
    use llm_hf_registry::{FileModelRegistry, InMemoryModelRegistry};
    use tempfile::TempDir;

    fn keys() -> Arc<dyn KeySource> {
        Arc::new(StaticKeySource::new().with_key("huggingface", "hf_test"))
    }

    #[test]
    fn test_builds_one_model_per_identifier() {
        let registry = Arc::new(InMemoryModelRegistry::with_models([
            "bigscience/bloom",
            "gpt2",
            "bigscience/bloom",
        ]));
        let factory = ModelFactory::new(registry, keys(), HuggingFaceConfig::default());

        let models = factory.build_all().unwrap();
        let ids: Vec<_> = models.iter().map(|m| m.model_id()).collect();
        assert_eq!(ids, vec!["huggingface/bigscience/bloom", "huggingface/gpt2"]);
        assert_eq!(
            models[0].url(),
            "https://api-inference.huggingface.co/models/bigscience/bloom"
        );
    }

    #[test]
    fn test_missing_credential_builds_nothing() {
        let registry = Arc::new(InMemoryModelRegistry::with_models(["gpt2"]));
        let factory = ModelFactory::new(
            registry,
            Arc::new(StaticKeySource::new()),
            HuggingFaceConfig::default(),
        );

        let err = factory.build_all().unwrap_err();
        assert!(matches!(err, ModelError::Configuration(_)));
    }

    #[test]
    fn test_empty_registry_needs_no_credential() {
        let factory = ModelFactory::new(
            Arc::new(InMemoryModelRegistry::new()),
            Arc::new(StaticKeySource::new()),
            HuggingFaceConfig::default(),
        );
        assert!(factory.build_all().unwrap().is_empty());
    }

    #[test]
    fn test_reads_file_registry() {
        let dir = TempDir::new().unwrap();
        let registry = FileModelRegistry::new(dir.path().join("hf_models.txt"));
        registry.add("tiiuae/falcon-7b").unwrap();
        registry.add("bigscience/bloom").unwrap();

        let factory = ModelFactory::new(Arc::new(registry), keys(), HuggingFaceConfig::default());
        let names: Vec<_> = factory
            .build_all()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            names,
            vec!["HuggingFace: bigscience/bloom", "HuggingFace: tiiuae/falcon-7b"]
        );
    }

    #[test]
    fn test_unreadable_registry_is_error() {
        let dir = TempDir::new().unwrap();
        let factory = ModelFactory::new(
            Arc::new(FileModelRegistry::new(dir.path())),
            keys(),
            HuggingFaceConfig::default(),
        );
        assert!(matches!(factory.build_all().unwrap_err(), ModelError::Registry(_)));
    }
}
