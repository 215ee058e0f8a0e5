//! Outcome of a single inference call.

use std::fmt;

/// What one prompt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceResult {
    /// Generated text.
    Text(String),
    /// The endpoint could not be reached or declined the request.
    NoResult(NoResult),
}

impl InferenceResult {
    /// Get the generated text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            InferenceResult::Text(text) => Some(text),
            InferenceResult::NoResult(_) => None,
        }
    }

    /// Take the generated text, if any.
    pub fn into_text(self) -> Option<String> {
        match self {
            InferenceResult::Text(text) => Some(text),
            InferenceResult::NoResult(_) => None,
        }
    }

    /// Check if no text was produced.
    pub fn is_no_result(&self) -> bool {
        matches!(self, InferenceResult::NoResult(_))
    }
}

/// Why an inference call produced nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoResult {
    /// Non-success HTTP status (rate limit, model loading, bad request).
    Upstream {
        /// HTTP status code.
        status: u16,
        /// `error` field of the body when present, otherwise the raw body.
        message: String,
    },
    /// The request never got a response.
    Transport(String),
}

impl fmt::Display for NoResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoResult::Upstream { status, message } if message.is_empty() => {
                write!(f, "HTTP {status}")
            }
            NoResult::Upstream { status, message } => write!(f, "HTTP {status}: {message}"),
            NoResult::Transport(message) => write!(f, "transport failure: {message}"),
        }
    }
}
