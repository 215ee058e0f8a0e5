//! Mock model for testing hosts without network access.
//!
//! ```rust
//! use llm_hf_models::MockModel;
//!
//! let model = MockModel::new("test")
//!     .with_text_response("First response")
//!     .with_no_result();
//! ```

use async_trait::async_trait;
use futures::stream;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use crate::error::ModelError;
use crate::model::{Model, ResponseStream};
use crate::options::GenerationOptions;
use crate::response::{InferenceResult, NoResult};

/// A model returning queued results and recording the prompts it saw.
///
/// Once the queue is empty every prompt yields a transport no-result.
/// Clones share the queue and the recorded prompts.
#[derive(Debug, Clone)]
pub struct MockModel {
    model_id: String,
    responses: Arc<Mutex<VecDeque<InferenceResult>>>,
    prompts: Arc<Mutex<Vec<(String, GenerationOptions)>>>,
}

impl MockModel {
    /// Create a mock with an empty queue.
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            responses: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a text result.
    #[must_use]
    pub fn with_text_response(self, text: impl Into<String>) -> Self {
        self.responses
            .lock()
            .push_back(InferenceResult::Text(text.into()));
        self
    }

    /// Queue an upstream 503 no-result.
    #[must_use]
    pub fn with_no_result(self) -> Self {
        self.responses
            .lock()
            .push_back(InferenceResult::NoResult(NoResult::Upstream {
                status: 503,
                message: "mock unavailable".to_string(),
            }));
        self
    }

    /// Prompts received so far, with their options.
    pub fn recorded_prompts(&self) -> Vec<(String, GenerationOptions)> {
        self.prompts.lock().clone()
    }
}

impl fmt::Display for MockModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mock: {}", self.model_id)
    }
}

#[async_trait]
impl Model for MockModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn execute(&self, prompt: &str, options: &GenerationOptions) -> ResponseStream {
        let model = self.clone();
        let prompt = prompt.to_string();
        let options = options.clone();
        Box::pin(stream::once(async move {
            options.validate()?;
            model.prompts.lock().push((prompt, options));
            let next = model.responses.lock().pop_front();
            Ok::<_, ModelError>(next.unwrap_or_else(|| {
                InferenceResult::NoResult(NoResult::Transport("mock queue empty".to_string()))
            }))
        }))
    }
}
