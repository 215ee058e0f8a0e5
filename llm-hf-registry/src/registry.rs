//! The `ModelRegistry` trait and list-editing operations.

use crate::error::{RegistryError, RegistryResult};

/// Ordered storage for subscribed model identifiers.
///
/// Implementations only need `load` and `save`; `add` and `remove` are
/// built on top of them and always persist the list sorted ascending.
pub trait ModelRegistry: Send + Sync {
    /// Load the stored identifiers.
    ///
    /// Returns an empty list when nothing has been stored yet.
    fn load(&self) -> RegistryResult<Vec<String>>;

    /// Replace the stored identifiers with `models`.
    fn save(&self, models: &[String]) -> RegistryResult<()>;

    /// Subscribe to a model.
    ///
    /// Returns `false` if the identifier was already present. The list is
    /// re-sorted and saved either way.
    fn add(&self, model_id: &str) -> RegistryResult<bool> {
        let model_id = validate_identifier(model_id)?;
        let mut models = self.load()?;
        let added = !models.iter().any(|m| m == model_id);
        if added {
            models.push(model_id.to_string());
        }
        normalize(&mut models);
        self.save(&models)?;
        tracing::info!(model_id, added, "Added HuggingFace model");
        Ok(added)
    }

    /// Unsubscribe from a model.
    ///
    /// Surrounding whitespace is trimmed as in [`add`](Self::add). Removing
    /// an identifier that is not present is a no-op and returns `false`.
    fn remove(&self, model_id: &str) -> RegistryResult<bool> {
        let model_id = model_id.trim();
        let mut models = self.load()?;
        let before = models.len();
        models.retain(|m| m != model_id);
        let removed = models.len() != before;
        normalize(&mut models);
        self.save(&models)?;
        tracing::info!(model_id, removed, "Removed HuggingFace model");
        Ok(removed)
    }
}

/// Check that `model_id` can be stored as one line of the list.
///
/// Surrounding whitespace is trimmed; empty identifiers and identifiers
/// with inner whitespace are rejected.
pub fn validate_identifier(model_id: &str) -> RegistryResult<&str> {
    let trimmed = model_id.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return Err(RegistryError::invalid_identifier(model_id));
    }
    Ok(trimmed)
}

/// Sort ascending and drop duplicates.
pub fn normalize(models: &mut Vec<String>) {
    models.sort();
    models.dedup();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims() {
        assert_eq!(validate_identifier("  gpt2 \n").unwrap(), "gpt2");
        assert_eq!(
            validate_identifier("bigscience/bloom").unwrap(),
            "bigscience/bloom"
        );
    }

    #[test]
    fn test_validate_rejects_blank_and_inner_whitespace() {
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("   ").is_err());
        assert!(validate_identifier("big science/bloom").is_err());
        assert!(validate_identifier("a\nb").is_err());
    }

    #[test]
    fn test_normalize_sorts_and_dedups() {
        let mut models = vec![
            "tiiuae/falcon-7b".to_string(),
            "bigscience/bloom".to_string(),
            "gpt2".to_string(),
            "bigscience/bloom".to_string(),
        ];
        normalize(&mut models);
        assert_eq!(models, vec!["bigscience/bloom", "gpt2", "tiiuae/falcon-7b"]);
    }
}
