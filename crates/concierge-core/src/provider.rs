use std::{future::Future, pin::Pin};

use tokio_util::sync::CancellationToken;

use crate::{error::Result, template::RenderedPrompt};

/// A **backend** turns a rendered prompt into a network call to a concrete
/// completion service and returns the raw completion text.
///
/// The trait is intentionally minimal:
///
/// * **One method** – `complete`, which performs a *single* non-streaming
///   round trip. No retries; failures are reported through the
///   [`ConciergeError`](crate::error::ConciergeError) taxonomy.
/// * **Object safe** – the method returns a boxed future, so routers can hold
///   a `dyn CompletionProvider` if they want to.
///
/// Endpoint, model and sampling parameters are fixed when the backend is
/// constructed; callers only hand over the prompt.
pub trait CompletionProvider: Send + Sync {
    fn complete<'p>(
        &'p self,
        params: CompletionParameters,
    ) -> Pin<Box<dyn Future<Output = Result<Completion>> + Send + 'p>>;
}

/// Everything a single completion call needs from the caller.
#[derive(Debug, Clone)]
pub struct CompletionParameters {
    pub prompt: RenderedPrompt,
    pub cancellation: Option<CancellationToken>,
}

impl CompletionParameters {
    pub fn new(prompt: RenderedPrompt) -> Self {
        Self {
            prompt,
            cancellation: None,
        }
    }

    pub fn prompt(&self) -> &RenderedPrompt {
        &self.prompt
    }

    /// Abort the call as soon as `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

/// Raw, unsanitized completion returned by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub usage: Option<UsageReport>,
}

impl Completion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageReport {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl UsageReport {
    pub fn total_tokens(&self) -> u64 {
        self.prompt_tokens + self.completion_tokens
    }
}
