//! HuggingFace model implementation.

use async_trait::async_trait;
use futures::stream;
use std::fmt;

use super::client::InferenceClient;
use super::types::{GenerateParameters, GenerateRequest};
use crate::config::HuggingFaceConfig;
use crate::error::ModelResult;
use crate::key::{resolve_credential, Credential, KeySource, PROVIDER_NAME};
use crate::model::{Model, ResponseStream};
use crate::options::GenerationOptions;
use crate::response::InferenceResult;

/// HuggingFace Inference API base URL.
pub const HF_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";

/// Prefix of the host-facing model id.
pub const MODEL_ID_PREFIX: &str = "huggingface/";

/// Endpoint for `identifier` under `base_url`.
pub fn endpoint_url(base_url: &str, identifier: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), identifier)
}

/// One subscribed HuggingFace model.
///
/// Immutable after construction; `execute` may run concurrently.
#[derive(Debug, Clone)]
pub struct HuggingFaceModel {
    /// Identifier as stored in the registry (e.g. "bigscience/bloom").
    identifier: String,
    /// `huggingface/<identifier>`.
    model_id: String,
    url: String,
    credential: Credential,
    client: InferenceClient,
}

impl HuggingFaceModel {
    /// Create a model, resolving the credential now.
    ///
    /// Fails with [`ModelError::Configuration`](crate::ModelError::Configuration)
    /// when no key is available, before any network access.
    pub fn new(
        identifier: impl Into<String>,
        keys: &dyn KeySource,
        config: &HuggingFaceConfig,
    ) -> ModelResult<Self> {
        let credential = resolve_credential(keys)?;
        let client = InferenceClient::new(config)?;
        Ok(Self::with_parts(identifier, credential, client, &config.base_url))
    }

    /// Create a model from an already resolved credential and client.
    pub fn with_parts(
        identifier: impl Into<String>,
        credential: Credential,
        client: InferenceClient,
        base_url: &str,
    ) -> Self {
        let identifier = identifier.into();
        Self {
            model_id: format!("{MODEL_ID_PREFIX}{identifier}"),
            url: endpoint_url(base_url, &identifier),
            identifier,
            credential,
            client,
        }
    }

    /// Registry identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Inference endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send a prepared request.
    pub async fn query(&self, request: &GenerateRequest) -> ModelResult<InferenceResult> {
        self.client.query(&self.url, &self.credential, request).await
    }
}

impl fmt::Display for HuggingFaceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HuggingFace: {}", self.identifier)
    }
}

#[async_trait]
impl Model for HuggingFaceModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn needs_key(&self) -> Option<&str> {
        Some(PROVIDER_NAME)
    }

    fn execute(&self, prompt: &str, options: &GenerationOptions) -> ResponseStream {
        let model = self.clone();
        let prompt = prompt.to_string();
        let options = options.clone();
        Box::pin(stream::once(async move {
            options.validate()?;
            let request = GenerateRequest::new(prompt)
                .with_parameters(GenerateParameters::from_options(&options));
            model.query(&request).await
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::key::StaticKeySource;
    use crate::response::NoResult;
    use futures::StreamExt;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn keys() -> StaticKeySource {
        StaticKeySource::new().with_key("huggingface", "hf_test")
    }

    fn model_at(server: &MockServer, identifier: &str) -> HuggingFaceModel {
        let config = HuggingFaceConfig::new()
            .base_url(format!("{}/models", server.uri()))
            .timeout(Duration::from_secs(5));
        HuggingFaceModel::new(identifier, &keys(), &config).unwrap()
    }

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url(HF_INFERENCE_URL, "bigscience/bloom"),
            "https://api-inference.huggingface.co/models/bigscience/bloom"
        );
        assert_eq!(endpoint_url("http://localhost:8080/", "gpt2"), "http://localhost:8080/gpt2");
    }

    #[test]
    fn test_model_metadata() {
        let model =
            HuggingFaceModel::new("bigscience/bloom", &keys(), &HuggingFaceConfig::default())
                .unwrap();
        assert_eq!(model.identifier(), "bigscience/bloom");
        assert_eq!(model.model_id(), "huggingface/bigscience/bloom");
        assert_eq!(model.to_string(), "HuggingFace: bigscience/bloom");
        assert_eq!(
            model.url(),
            "https://api-inference.huggingface.co/models/bigscience/bloom"
        );
        assert!(!model.can_stream());
        assert_eq!(model.needs_key(), Some("huggingface"));
    }

    #[test]
    fn test_missing_credential_fails_construction() {
        let err = HuggingFaceModel::new(
            "bigscience/bloom",
            &StaticKeySource::new(),
            &HuggingFaceConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_missing_credential_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = HuggingFaceConfig::new().base_url(format!("{}/models", server.uri()));
        let result = HuggingFaceModel::new("gpt2", &StaticKeySource::new(), &config);
        assert!(result.is_err());
        server.verify().await;
    }

    #[tokio::test]
    async fn test_execute_yields_single_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/bigscience/bloom"))
            .and(header("Authorization", "Bearer hf_test"))
            .and(body_json(json!({
                "inputs": "The meaning of life is",
                "parameters": {"max_new_tokens": 10}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"generated_text": "the meaning is 42"}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let model = model_at(&server, "bigscience/bloom");
        let options = GenerationOptions::new().length(10);
        let results: Vec<_> = model.execute("The meaning of life is", &options).collect().await;

        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].as_ref().unwrap().text(),
            Some("the meaning is 42")
        );
    }

    #[tokio::test]
    async fn test_execute_is_lazy() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"generated_text": ""}])))
            .expect(0)
            .mount(&server)
            .await;

        let model = model_at(&server, "gpt2");
        let stream = model.execute("unused", &GenerationOptions::default());
        drop(stream);
        server.verify().await;
    }

    #[tokio::test]
    async fn test_prompt_upstream_failure_is_no_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let model = model_at(&server, "bigscience/bloom");
        let result = model.prompt("hi", &GenerationOptions::default()).await.unwrap();
        assert!(matches!(
            result,
            InferenceResult::NoResult(NoResult::Upstream { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_options_rejected_before_send() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let model = model_at(&server, "gpt2");
        let err = model
            .prompt("hi", &GenerationOptions::new().top_p(2.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidOptions(_)));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_concurrent_prompts_are_independent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({"inputs": "one", "parameters": {}})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"generated_text": "1"}])),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_json(json!({"inputs": "two", "parameters": {}})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"generated_text": "2"}])),
            )
            .mount(&server)
            .await;

        let model = model_at(&server, "gpt2");
        let options = GenerationOptions::default();
        let (one, two) = tokio::join!(model.prompt("one", &options), model.prompt("two", &options));

        assert_eq!(one.unwrap().text(), Some("1"));
        assert_eq!(two.unwrap().text(), Some("2"));
    }
}
