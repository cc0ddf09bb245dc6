use std::{future::Future, pin::Pin, sync::Arc};

use concierge_core::{
    error::Result,
    provider::{Completion, CompletionParameters, CompletionProvider},
};

use crate::{OllamaAdapter, api::GenerateRequest, error::OllamaError};

impl CompletionProvider for OllamaAdapter {
    fn complete<'p>(
        &'p self,
        params: CompletionParameters,
    ) -> Pin<Box<dyn Future<Output = Result<Completion>> + Send + 'p>> {
        let client = Arc::clone(&self.client);
        let config = Arc::clone(&self.config);

        Box::pin(async move {
            let CompletionParameters {
                prompt,
                cancellation,
            } = params;

            let request =
                GenerateRequest::new(config.model.to_string(), prompt.into_inner(), &config.sampling);

            tracing::debug!(
                endpoint = %client.endpoint(),
                model = %request.model,
                prompt_len = request.prompt.len(),
                "sending generate request"
            );

            let call = client.generate(&request);
            let outcome = match cancellation {
                Some(token) => tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(OllamaError::Cancelled),
                    outcome = call => outcome,
                },
                None => call.await,
            };

            let response = match outcome {
                Ok(response) => response,
                Err(err) => {
                    tracing::warn!(endpoint = %client.endpoint(), error = %err, "generate request failed");
                    return Err(err.into());
                }
            };

            let usage = response.usage();
            tracing::debug!(
                completion_len = response.response.len(),
                prompt_tokens = usage.map(|u| u.prompt_tokens),
                completion_tokens = usage.map(|u| u.completion_tokens),
                "generate request completed"
            );

            Ok(Completion {
                text: response.response,
                usage,
            })
        })
    }
}
