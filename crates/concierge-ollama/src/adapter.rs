use std::{env, sync::Arc, time::Duration};

use concierge_core::{
    config::BackendConfig,
    error::{ConciergeError, Result},
    model::Model,
};
use reqwest::{Client as HttpClient, Url};

use crate::client::OllamaClient;

pub const ENV_URL: &str = "OLLAMA_URL";
pub const ENV_MODEL: &str = "OLLAMA_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "OLLAMA_TIMEOUT_SECS";

/// Thin wrapper that wires the HTTP client [`OllamaClient`] into a value that
/// implements [`concierge_core::provider::CompletionProvider`].
///
/// It owns the immutable [`BackendConfig`] (endpoint, model, sampling
/// parameters, timeout) and a shareable, connection-pooled
/// `reqwest::Client`. All user-facing functionality sits on the generic
/// [`concierge_core::ConciergeClient`] once the adapter is plugged in.
#[derive(Debug)]
pub struct OllamaAdapter {
    pub(crate) client: Arc<OllamaClient>,
    pub(crate) config: Arc<BackendConfig>,
}

impl OllamaAdapter {
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

/// Builder for [`OllamaAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use concierge_ollama::OllamaAdapterBuilder;
///
/// let backend = OllamaAdapterBuilder::new_from_env()
///     .build()
///     .expect("OLLAMA_URL must be a valid URL");
/// ```
#[derive(Debug, Default)]
pub struct OllamaAdapterBuilder {
    pub(crate) config: BackendConfig,
    pub(crate) timeout_override: Option<String>,
    pub(crate) http: Option<HttpClient>,
}

impl OllamaAdapterBuilder {
    /// Builder with the stock local defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the defaults and apply `OLLAMA_URL`, `OLLAMA_MODEL` and
    /// `OLLAMA_TIMEOUT_SECS` where set.
    ///
    /// # Panics
    ///
    /// Never panics. Malformed values only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = BackendConfig::default();
        if let Some(url) = lookup(ENV_URL) {
            config.endpoint = url;
        }
        if let Some(model) = lookup(ENV_MODEL) {
            config.model = Model::from(model);
        }

        Self {
            config,
            timeout_override: lookup(ENV_TIMEOUT_SECS),
            http: None,
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: BackendConfig) -> Self {
        self.config = config;
        self.timeout_override = None;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config = self.config.with_timeout(timeout);
        self.timeout_override = None;
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxy, custom TLS, …).
    pub fn with_http(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`ConciergeError::Invalid`] – if the endpoint is not a URL, the
    ///   timeout is not a whole number of seconds, or the HTTP client cannot
    ///   be constructed.
    pub fn build(self) -> Result<OllamaAdapter> {
        let mut config = self.config;

        if let Some(raw) = self.timeout_override {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ConciergeError::Invalid(format!(
                    "`{ENV_TIMEOUT_SECS}` must be a whole number of seconds, got `{raw}`"
                ))
            })?;
            // Zero disables the timeout.
            config.timeout_secs = (secs > 0).then_some(secs);
        }

        let endpoint = Url::parse(&config.endpoint).map_err(|err| {
            ConciergeError::Invalid(format!("invalid endpoint `{}`: {err}", config.endpoint))
        })?;

        let http = match self.http {
            Some(http) => http,
            None => HttpClient::builder().build().map_err(|err| {
                ConciergeError::Invalid(format!("building reqwest client: {err}"))
            })?,
        };

        let client = OllamaClient::with_http(http, endpoint, config.timeout());

        Ok(OllamaAdapter {
            client: Arc::new(client),
            config: Arc::new(config),
        })
    }
}
