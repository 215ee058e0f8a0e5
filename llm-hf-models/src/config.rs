//! HuggingFace client configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::huggingface::HF_INFERENCE_URL;

/// Configuration shared by every HuggingFace model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuggingFaceConfig {
    /// Base URL; the model identifier is appended to it.
    pub base_url: String,
    /// Request timeout in seconds. `None` keeps the transport default.
    pub timeout_seconds: Option<u64>,
    /// Log request URLs, payloads and responses at debug level.
    pub debug: bool,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            base_url: HF_INFERENCE_URL.to_string(),
            timeout_seconds: None,
            debug: false,
        }
    }
}

impl HuggingFaceConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout, rounded up to whole seconds.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self.timeout_seconds = Some(secs);
        self
    }

    /// Enable or disable debug logging of requests.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Get the request timeout, if one is set.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HuggingFaceConfig::default();
        assert_eq!(config.base_url, "https://api-inference.huggingface.co/models");
        assert_eq!(config.request_timeout(), None);
        assert!(!config.debug);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: HuggingFaceConfig = serde_json::from_str(r#"{"debug": true}"#).unwrap();
        assert!(config.debug);
        assert_eq!(config.base_url, HF_INFERENCE_URL);
    }

    #[test]
    fn test_timeout() {
        let config = HuggingFaceConfig::new().timeout(Duration::from_secs(30));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_sub_second_timeout_rounds_up() {
        let config = HuggingFaceConfig::new().timeout(Duration::from_millis(500));
        assert_eq!(config.timeout_seconds, Some(1));

        let config = HuggingFaceConfig::new().timeout(Duration::from_millis(2001));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(3)));
    }
}
