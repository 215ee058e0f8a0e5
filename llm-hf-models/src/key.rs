//! Credential lookup.
//!
//! Keys are owned by the host; this crate only asks for one through
//! [`KeySource`], by provider name with an environment variable fallback.

use std::collections::HashMap;
use std::fmt;

use reqwest::header::HeaderValue;

use crate::error::{ModelError, ModelResult};

/// Provider name the key is stored under.
pub const PROVIDER_NAME: &str = "huggingface";

/// Environment variable consulted when no stored key exists.
pub const KEY_ENV_VAR: &str = "LLM_HUGGINGFACE_KEY";

/// Host key-lookup service.
pub trait KeySource: Send + Sync {
    /// Look up the key for `provider`, falling back to `env_var`.
    fn get_key(&self, provider: &str, env_var: &str) -> Option<String>;
}

/// Reads keys from the process environment only.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvKeySource;

impl KeySource for EnvKeySource {
    fn get_key(&self, _provider: &str, env_var: &str) -> Option<String> {
        std::env::var(env_var).ok()
    }
}

/// Keys supplied by the host, keyed by provider name.
#[derive(Default)]
pub struct StaticKeySource {
    keys: HashMap<String, String>,
    env_fallback: bool,
}

impl StaticKeySource {
    /// Create an empty source without environment fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a key for a provider.
    #[must_use]
    pub fn with_key(mut self, provider: impl Into<String>, key: impl Into<String>) -> Self {
        self.keys.insert(provider.into(), key.into());
        self
    }

    /// Consult the environment variable when no key is stored.
    #[must_use]
    pub fn with_env_fallback(mut self) -> Self {
        self.env_fallback = true;
        self
    }
}

impl fmt::Debug for StaticKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticKeySource")
            .field("providers", &self.keys.keys().collect::<Vec<_>>())
            .field("env_fallback", &self.env_fallback)
            .finish()
    }
}

impl KeySource for StaticKeySource {
    fn get_key(&self, provider: &str, env_var: &str) -> Option<String> {
        self.keys.get(provider).cloned().or_else(|| {
            self.env_fallback
                .then(|| EnvKeySource.get_key(provider, env_var))
                .flatten()
        })
    }
}

/// Secret used as the bearer token. `Debug` never shows the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Resolve the HuggingFace credential.
///
/// Surrounding whitespace is trimmed and empty keys count as missing. A key
/// that cannot be sent in an `Authorization` header is rejected here rather
/// than on the first request.
pub fn resolve_credential(keys: &dyn KeySource) -> ModelResult<Credential> {
    let key = keys
        .get_key(PROVIDER_NAME, KEY_ENV_VAR)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            ModelError::configuration(format!(
                "Please set the key for {PROVIDER_NAME} or the environment variable {KEY_ENV_VAR}"
            ))
        })?;

    let credential = Credential::new(key);
    HeaderValue::from_str(&credential.authorization()).map_err(|_| {
        ModelError::configuration(format!(
            "The key for {PROVIDER_NAME} contains characters not allowed in an HTTP header"
        ))
    })?;
    Ok(credential)
}
