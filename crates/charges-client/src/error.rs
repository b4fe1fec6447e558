//! Error types for predictor requests.

use thiserror::Error;

/// Shown when no more specific message is available.
pub const FALLBACK_MESSAGE: &str = "Something went wrong.";

/// Shown when the server rejects a request without explaining why.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed.";

/// Errors that can occur while asking the predictor for an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PredictError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("predictor returned {status}: {}", .detail.as_deref().unwrap_or(REQUEST_FAILED_MESSAGE))]
    Server {
        /// HTTP status code.
        status: u16,
        /// `detail` message from the response body, when one was supplied.
        detail: Option<String>,
    },

    /// The server answered 2xx but the body was not the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl PredictError {
    /// Returns the message shown to the user for this failure.
    ///
    /// Server-supplied detail is passed through verbatim. Transport errors
    /// use their own message when they have one.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Server {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => detail.as_str(),
            Self::Server { .. } => REQUEST_FAILED_MESSAGE,
            Self::Network(message) if !message.trim().is_empty() => message.as_str(),
            Self::Network(_) | Self::MalformedResponse(_) => FALLBACK_MESSAGE,
        }
    }

    /// Returns whether resubmitting the same request could succeed.
    ///
    /// Advisory only: nothing in this workspace retries automatically.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Server { status, .. } => *status >= 500 || *status == 429,
            Self::MalformedResponse(_) => false,
        }
    }
}

impl From<reqwest::Error> for PredictError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PredictError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

/// Result type alias for predictor operations.
pub type Result<T> = std::result::Result<T, PredictError>;
