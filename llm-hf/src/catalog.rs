//! Where registered models end up.

use std::collections::BTreeMap;
use std::sync::Arc;

use llm_hf_models::{BoxedModel, Model};

/// Receives models during registration.
pub trait ModelSink {
    /// Register one model.
    fn register(&mut self, model: BoxedModel);
}

impl ModelSink for Vec<BoxedModel> {
    fn register(&mut self, model: BoxedModel) {
        self.push(model);
    }
}

/// Models keyed by `model_id`.
///
/// Registering an id twice replaces the earlier model.
#[derive(Debug, Default)]
pub struct ModelCatalog {
    models: BTreeMap<String, BoxedModel>,
}

impl ModelCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a model by id.
    pub fn get(&self, model_id: &str) -> Option<BoxedModel> {
        self.models.get(model_id).map(Arc::clone)
    }

    /// Model ids in ascending order.
    pub fn ids(&self) -> Vec<&str> {
        self.models.keys().map(String::as_str).collect()
    }

    /// Iterate over the models in id order.
    pub fn iter(&self) -> impl Iterator<Item = &BoxedModel> {
        self.models.values()
    }

    /// Number of models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl ModelSink for ModelCatalog {
    fn register(&mut self, model: BoxedModel) {
        let id = model.model_id().to_string();
        if self.models.insert(id.clone(), model).is_some() {
            tracing::debug!(model_id = %id, "Replaced registered model");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm_hf_models::{GenerationOptions, MockModel};

    #[tokio::test]
    async fn test_last_registration_wins() {
        let mut catalog = ModelCatalog::new();
        catalog.register(Arc::new(MockModel::new("a").with_text_response("old")));
        catalog.register(Arc::new(MockModel::new("b")));
        catalog.register(Arc::new(MockModel::new("a").with_text_response("new")));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.ids(), vec!["a", "b"]);

        let result = catalog
            .get("a")
            .unwrap()
            .prompt("x", &GenerationOptions::default())
            .await
            .unwrap();
        assert_eq!(result.text(), Some("new"));
    }

    #[test]
    fn test_vec_sink_keeps_everything() {
        let mut sink: Vec<BoxedModel> = Vec::new();
        sink.register(Arc::new(MockModel::new("a")));
        sink.register(Arc::new(MockModel::new("a")));
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_get_missing() {
        let catalog = ModelCatalog::new();
        assert!(catalog.get("nope").is_none());
        assert!(catalog.is_empty());
    }
}
