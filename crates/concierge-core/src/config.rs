//! Immutable backend configuration.
//!
//! Everything that used to be a process-wide constant (endpoint, model tag,
//! sampling parameters, request timeout) lives in a [`BackendConfig`] value
//! that is handed to a backend at construction time. The defaults reproduce
//! the stock local setup.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::Model;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";

/// Seconds a single completion may take before it is abandoned.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Fixed sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    /// Upper bound on the completion length, in tokens.
    pub max_tokens: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_tokens: 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Full URL of the generate endpoint.
    pub endpoint: String,
    pub model: Model,
    pub sampling: SamplingConfig,
    /// `None` or `0` disables the timeout entirely.
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            model: Model::default(),
            sampling: SamplingConfig::default(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// A zero duration disables the timeout. Fractions of a second round up.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout_secs = timeout
            .filter(|t| !t.is_zero())
            .map(|t| t.as_secs() + u64::from(t.subsec_nanos() > 0));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_local_backend() {
        let config = BackendConfig::default();
        assert_eq!(config.endpoint, "http://localhost:11434/api/generate");
        assert_eq!(config.model.to_string(), "gemma3:latest");
        assert_eq!(config.sampling.temperature, 0.7);
        assert_eq!(config.sampling.top_k, 40);
        assert_eq!(config.sampling.top_p, 0.95);
        assert_eq!(config.sampling.max_tokens, 1024);
        assert_eq!(config.timeout(), Some(Duration::from_secs(120)));
    }

    #[test]
    fn zero_timeout_in_a_document_disables_it() {
        let config: BackendConfig = serde_json::from_str(r#"{ "timeout_secs": 0 }"#).unwrap();
        assert_eq!(config.timeout(), None);

        let config: BackendConfig = serde_json::from_str(r#"{ "timeout_secs": null }"#).unwrap();
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn with_timeout_disables_on_zero_and_rounds_up() {
        let config = BackendConfig::default();
        assert_eq!(config.clone().with_timeout(Some(Duration::ZERO)).timeout(), None);
        assert_eq!(config.clone().with_timeout(None).timeout(), None);
        assert_eq!(
            config.clone().with_timeout(Some(Duration::from_millis(1500))).timeout(),
            Some(Duration::from_secs(2))
        );
        assert_eq!(
            config.with_timeout(Some(Duration::from_millis(250))).timeout(),
            Some(Duration::from_secs(1))
        );
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let config: BackendConfig = serde_json::from_str(
            r#"{ "model": "llama3.2:latest", "sampling": { "temperature": 0.2 } }"#,
        )
        .unwrap();

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model.to_string(), "llama3.2:latest");
        assert_eq!(config.sampling.temperature, 0.2);
        assert_eq!(config.sampling.top_k, 40);
    }
}
