//! HTTP round-trip to the inference endpoint.

use reqwest::Client;
use tracing::{debug, warn};

use super::types::{GenerateRequest, GenerateResponse, HuggingFaceError};
use crate::config::HuggingFaceConfig;
use crate::error::{ModelError, ModelResult};
use crate::key::Credential;
use crate::response::{InferenceResult, NoResult};

/// Sends one text-generation request and reads the whole response.
///
/// No retries and no streaming. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: Client,
    debug: bool,
}

impl InferenceClient {
    /// Build a client from the configuration.
    pub fn new(config: &HuggingFaceConfig) -> ModelResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ModelError::http(e.to_string()))?;
        Ok(Self {
            http,
            debug: config.debug,
        })
    }

    /// POST `request` to `url`.
    ///
    /// Non-success statuses and transport failures come back as
    /// [`InferenceResult::NoResult`]. A success body that is not a
    /// non-empty array of `{"generated_text": ...}` is an
    /// [`ModelError::InvalidResponse`].
    pub async fn query(
        &self,
        url: &str,
        credential: &Credential,
        request: &GenerateRequest,
    ) -> ModelResult<InferenceResult> {
        if self.debug {
            debug!(
                url,
                authorization = "Bearer <redacted>",
                payload = %serde_json::to_string(request)?,
                "HuggingFace request"
            );
        }

        let response = match self
            .http
            .post(url)
            .header("Authorization", credential.authorization())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Ok(transport_failure(url, &e)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = upstream_message(&body);
            warn!(url, status = status.as_u16(), %message, "HuggingFace returned no result");
            return Ok(InferenceResult::NoResult(NoResult::Upstream {
                status: status.as_u16(),
                message,
            }));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return Ok(transport_failure(url, &e)),
        };
        if self.debug {
            debug!(url, response = %body, "HuggingFace response");
        }

        parse_generated_text(&body).map(InferenceResult::Text)
    }
}

fn transport_failure(url: &str, err: &reqwest::Error) -> InferenceResult {
    warn!(url, error = %err, "HuggingFace request failed");
    InferenceResult::NoResult(NoResult::Transport(err.to_string()))
}

/// Prefer the `error` field of a HuggingFace error body.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<HuggingFaceError>(body)
        .map(|err| err.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

fn parse_generated_text(body: &str) -> ModelResult<String> {
    let results: GenerateResponse = serde_json::from_str(body).map_err(|e| {
        ModelError::invalid_response(format!(
            "expected a JSON array of objects with `generated_text`: {e}"
        ))
    })?;
    results
        .into_iter()
        .next()
        .map(|r| r.generated_text)
        .ok_or_else(|| ModelError::invalid_response("empty result array"))
}
