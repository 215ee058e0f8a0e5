//! Core model trait.
//!
//! The host treats every model as something that turns a prompt into a
//! stream of results. Models that cannot stream yield exactly one item.

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use std::fmt;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::{ModelError, ModelResult};
use crate::options::GenerationOptions;
use crate::response::InferenceResult;

/// Lazy stream of results. Nothing is sent until it is polled.
pub type ResponseStream = Pin<Box<dyn Stream<Item = ModelResult<InferenceResult>> + Send>>;

/// A model the host can invoke.
#[async_trait]
pub trait Model: Send + Sync + fmt::Debug + fmt::Display {
    /// Host-facing model id.
    fn model_id(&self) -> &str;

    /// Whether `execute` yields incremental chunks.
    fn can_stream(&self) -> bool {
        false
    }

    /// Provider name of the key this model needs, if any.
    fn needs_key(&self) -> Option<&str> {
        None
    }

    /// Run a prompt.
    fn execute(&self, prompt: &str, options: &GenerationOptions) -> ResponseStream;

    /// Run a prompt and wait for its single result.
    async fn prompt(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> ModelResult<InferenceResult> {
        self.execute(prompt, options)
            .next()
            .await
            .unwrap_or_else(|| Err(ModelError::invalid_response("model produced no result")))
    }
}

/// Shared model for dynamic dispatch.
pub type BoxedModel = Arc<dyn Model>;
