//! In-memory registry for tests and embedding hosts.

use parking_lot::RwLock;

use crate::error::RegistryResult;
use crate::registry::ModelRegistry;

/// Registry that keeps the list in memory.
#[derive(Debug, Default)]
pub struct InMemoryModelRegistry {
    models: RwLock<Vec<String>>,
}

impl InMemoryModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding `models` as-is.
    pub fn with_models<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            models: RwLock::new(models.into_iter().map(Into::into).collect()),
        }
    }
}

impl ModelRegistry for InMemoryModelRegistry {
    fn load(&self) -> RegistryResult<Vec<String>> {
        Ok(self.models.read().clone())
    }

    fn save(&self, models: &[String]) -> RegistryResult<()> {
        *self.models.write() = models.to_vec();
        Ok(())
    }
}
