use std::time::Duration;

use reqwest::{Client as HttpClient, Url};

use crate::{
    api::{GenerateRequest, GenerateResponse},
    error::OllamaError,
};

/// Minimal HTTP client for Ollama’s *generate* endpoint.
///
/// * Non-streaming only (one request ▶ one response).
/// * Accepts and returns the `api` request / response structs defined in
///   this crate.
/// * Shares a single `reqwest::Client`, so cloning `OllamaClient` is cheap.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: HttpClient,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl OllamaClient {
    /// Wrap an existing `reqwest::Client`. `timeout` is applied per request,
    /// on top of whatever the HTTP client itself enforces.
    pub fn with_http(http: HttpClient, endpoint: Url, timeout: Option<Duration>) -> Self {
        Self {
            http,
            endpoint,
            timeout,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Perform a **non-streaming** generate call.
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, OllamaError> {
        let mut builder = self.http.post(self.endpoint.clone()).json(request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let resp = builder.send().await.map_err(|err| self.classify(err))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(OllamaError::Api { status, body });
        }

        let bytes = resp.bytes().await.map_err(|err| self.classify(err))?;
        let parsed: GenerateResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }

    fn classify(&self, err: reqwest::Error) -> OllamaError {
        match self.timeout {
            Some(after) if err.is_timeout() => OllamaError::Timeout(after),
            _ => OllamaError::Http(err),
        }
    }
}
