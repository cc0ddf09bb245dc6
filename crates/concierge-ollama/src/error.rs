use std::time::Duration;

use concierge_core::error::ConciergeError;
use reqwest::StatusCode;

/// Every failure mode of a generate round trip.
#[derive(Debug, thiserror::Error)]
pub enum OllamaError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t parse response body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Ollama returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("request was cancelled")]
    Cancelled,
}

impl From<OllamaError> for ConciergeError {
    fn from(value: OllamaError) -> Self {
        match value {
            OllamaError::Http(err) => ConciergeError::Transport(Box::new(err)),
            OllamaError::Serde(err) => ConciergeError::Transport(Box::new(err)),
            OllamaError::Api { status, body } => ConciergeError::Status {
                status: status.as_u16(),
                body,
            },
            OllamaError::Timeout(after) => ConciergeError::Timeout(after),
            OllamaError::Cancelled => ConciergeError::Cancelled,
        }
    }
}
