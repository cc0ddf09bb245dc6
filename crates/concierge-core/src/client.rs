//! Generic, lightweight client that renders a prompt, runs it against a
//! single concrete [`CompletionProvider`] and sanitizes the answer.
//!
//! The client is **generic over the backend type `B`**, so no dynamic
//! dispatch is involved and any backend crate (e.g. `concierge-ollama`) works
//! out of the box.
//!
//! ```rust
//! use std::{future::Future, pin::Pin};
//!
//! use concierge_core::{
//!     ConciergeClient,
//!     error::Result,
//!     provider::{Completion, CompletionParameters, CompletionProvider},
//!     template::{RenderContext, TemplateSpec},
//! };
//!
//! struct Echo;
//!
//! impl CompletionProvider for Echo {
//!     fn complete<'p>(
//!         &'p self,
//!         params: CompletionParameters,
//!     ) -> Pin<Box<dyn Future<Output = Result<Completion>> + Send + 'p>> {
//!         Box::pin(async move { Ok(Completion::new(params.prompt.into_inner())) })
//!     }
//! }
//!
//! const SAY: TemplateSpec = TemplateSpec::new("say", "{{ text }}", &["text"]);
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let client = ConciergeClient::new(Echo);
//! let prompt = SAY.render(&RenderContext::new().with("text", "hi\nQ: more")).unwrap();
//! assert_eq!(client.run(prompt).await.unwrap().as_str(), "hi");
//! # }
//! ```
use std::{future::Future, pin::Pin, sync::Arc};

use tokio_util::sync::CancellationToken;

use crate::{
    error::Result,
    provider::{Completion, CompletionParameters, CompletionProvider},
    sanitize::{SanitizedResult, Sanitizer},
    template::IntoPrompt,
};

/// A client bound to a single backend.
///
/// Clone the client if you need to share it across tasks; the backend sits
/// behind an `Arc`, so that is cheap.
#[derive(Debug)]
pub struct ConciergeClient<B> {
    backend: Arc<B>,
    sanitizer: Sanitizer,
}

impl<B> Clone for ConciergeClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            sanitizer: self.sanitizer.clone(),
        }
    }
}

impl<B> ConciergeClient<B>
where
    B: CompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            sanitizer: Sanitizer::default(),
        }
    }

    /// Replace the stop-marker set.
    pub fn with_sanitizer(mut self, sanitizer: Sanitizer) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Render `prompt`, perform one round trip and sanitize the completion.
    ///
    /// Rendering failures abort before the backend is contacted.
    pub async fn run<P: IntoPrompt>(&self, prompt: P) -> Result<SanitizedResult> {
        self.execute(prompt, None).await
    }

    /// Same as [`Self::run`], but gives up as soon as `token` is cancelled.
    pub async fn run_cancellable<P: IntoPrompt>(
        &self,
        prompt: P,
        token: CancellationToken,
    ) -> Result<SanitizedResult> {
        self.execute(prompt, Some(token)).await
    }

    async fn execute<P: IntoPrompt>(
        &self,
        prompt: P,
        token: Option<CancellationToken>,
    ) -> Result<SanitizedResult> {
        let mut params = CompletionParameters::new(prompt.into_prompt()?);
        if let Some(token) = token {
            params = params.with_cancellation(token);
        }

        let completion = self.backend.complete(params).await?;
        Ok(self.sanitizer.sanitize(&completion.text))
    }
}

impl<B: CompletionProvider> CompletionProvider for ConciergeClient<B> {
    fn complete<'p>(
        &'p self,
        params: CompletionParameters,
    ) -> Pin<Box<dyn Future<Output = Result<Completion>> + Send + 'p>> {
        let backend = Arc::clone(&self.backend);
        Box::pin(async move { backend.complete(params).await })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{
        error::ConciergeError,
        template::{RenderContext, TemplateSpec},
    };

    const ASK: TemplateSpec = TemplateSpec::new("ask", "Q: {{ user_input }}\nA:", &["user_input"]);

    struct Canned {
        reply: std::result::Result<&'static str, u16>,
        seen: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new(reply: std::result::Result<&'static str, u16>) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl CompletionProvider for Canned {
        fn complete<'p>(
            &'p self,
            params: CompletionParameters,
        ) -> Pin<Box<dyn Future<Output = Result<Completion>> + Send + 'p>> {
            self.seen.lock().unwrap().push(params.prompt.into_inner());
            let reply = self.reply;
            Box::pin(async move {
                match reply {
                    Ok(text) => Ok(Completion::new(text)),
                    Err(status) => Err(ConciergeError::Status {
                        status,
                        body: "boom".into(),
                    }),
                }
            })
        }
    }

    struct Ask(&'static str);

    impl IntoPrompt for Ask {
        fn into_prompt(self) -> Result<crate::template::RenderedPrompt> {
            ASK.render(&RenderContext::new().with("user_input", self.0))
        }
    }

    #[tokio::test]
    async fn sanitizes_backend_completion() {
        let client = ConciergeClient::new(Canned::new(Ok("  Paris.\nQ: And Spain?")));
        let result = client.run(Ask("Capital of France?")).await.unwrap();

        assert_eq!(result.as_str(), "Paris.");
        assert_eq!(
            client.backend().seen.lock().unwrap().as_slice(),
            ["Q: Capital of France?\nA:"]
        );
    }

    #[tokio::test]
    async fn backend_errors_propagate_typed() {
        let client = ConciergeClient::new(Canned::new(Err(500)));
        let err = client.run(Ask("anything")).await.unwrap_err();
        assert!(err.to_string().starts_with("[Error 500]"));
    }

    struct Broken;

    impl IntoPrompt for Broken {
        fn into_prompt(self) -> Result<crate::template::RenderedPrompt> {
            TemplateSpec::new("broken", "Q: {{ missing }}", &[]).render(&RenderContext::new())
        }
    }

    #[tokio::test]
    async fn render_failure_never_reaches_backend() {
        let client = ConciergeClient::new(Canned::new(Ok("unused")));
        let err = client.run(Broken).await.unwrap_err();

        assert!(matches!(err, ConciergeError::UnresolvedPlaceholder { .. }));
        assert!(client.backend().seen.lock().unwrap().is_empty());
    }
}
