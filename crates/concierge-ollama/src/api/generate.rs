use serde::{Deserialize, Serialize};

use concierge_core::{config::SamplingConfig, provider::UsageReport};

/// Body of `POST /api/generate`.
///
/// Always non-streaming: the backend answers with a single JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_tokens: u32,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, sampling: &SamplingConfig) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            temperature: sampling.temperature,
            top_k: sampling.top_k,
            top_p: sampling.top_p,
            max_tokens: sampling.max_tokens,
        }
    }
}

/// The subset of the generate response this crate reads.
///
/// A body without `response` is not an error: it deserializes to an empty
/// completion, which the sanitizer later turns into the empty-response
/// sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub done: bool,
    /// Tokens in the prompt, as counted by the backend.
    #[serde(default)]
    pub prompt_eval_count: Option<u64>,
    /// Tokens generated.
    #[serde(default)]
    pub eval_count: Option<u64>,
}

impl GenerateResponse {
    pub fn usage(&self) -> Option<UsageReport> {
        Some(UsageReport {
            prompt_tokens: self.prompt_eval_count?,
            completion_tokens: self.eval_count?,
        })
    }
}
