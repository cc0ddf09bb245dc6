//! Stateless dispatch from a task selection to a finished result.
//!
//! ```text
//! TaskSelection ─► TaskRequest ─► template ─► render ─► backend ─► sanitize ─► TaskOutput
//!                       │
//!                       └─ JsonValidation ─► SchemaValidator ───────────────► TaskOutput
//! ```
//!
//! [`TaskRouter::run`] keeps everything typed. [`TaskRouter::route`] is the
//! edge for front ends: it formats every outcome, failures included, as a
//! displayable string.

mod output;
mod request;

pub use output::TaskOutput;
pub use request::{RouteError, TaskRequest, TaskSelection};

use concierge_core::{
    ConciergeClient,
    error::Result,
    provider::CompletionProvider,
    sanitize::SanitizedResult,
    schema::SchemaValidator,
    task::TaskKind,
    template::IntoPrompt,
};
use concierge_types::{
    outputs::RolePlayComparison,
    templates::{QaPrompt, RolePlayPrompt},
};
use tokio_util::sync::CancellationToken;

/// Routes tasks to one backend and one schema validator.
///
/// Holds no per-call state; clone it freely, the backend is shared.
#[derive(Debug)]
pub struct TaskRouter<B> {
    client: ConciergeClient<B>,
    validator: SchemaValidator,
}

impl<B> Clone for TaskRouter<B> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            validator: self.validator.clone(),
        }
    }
}

impl<B> TaskRouter<B>
where
    B: CompletionProvider,
{
    /// Route against `backend`, validating JSON against the contact schema.
    pub fn new(backend: B) -> Self {
        Self::from_client(ConciergeClient::new(backend))
    }

    pub fn from_client(client: ConciergeClient<B>) -> Self {
        Self {
            client,
            validator: SchemaValidator::default(),
        }
    }

    pub fn with_validator(mut self, validator: SchemaValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn client(&self) -> &ConciergeClient<B> {
        &self.client
    }

    pub fn validator(&self) -> &SchemaValidator {
        &self.validator
    }

    /// Run one task to completion.
    ///
    /// A comparison never fails as a whole: each side's outcome is kept in
    /// the returned [`RolePlayComparison`].
    pub async fn run(&self, request: TaskRequest) -> Result<TaskOutput> {
        self.execute(request, None).await
    }

    /// Same as [`Self::run`], but backend calls give up once `token` is
    /// cancelled.
    pub async fn run_cancellable(
        &self,
        request: TaskRequest,
        token: CancellationToken,
    ) -> Result<TaskOutput> {
        self.execute(request, Some(token)).await
    }

    /// Validate `selection`, run it and format the outcome. Never fails.
    pub async fn route(&self, selection: &TaskSelection) -> String {
        let request = match TaskRequest::from_selection(selection) {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!(task = %selection.task, error = %err, "rejected task selection");
                return err.to_string();
            }
        };

        match self.run(request).await {
            Ok(output) => output.to_string(),
            Err(err) => err.to_string(),
        }
    }

    async fn execute(
        &self,
        request: TaskRequest,
        token: Option<CancellationToken>,
    ) -> Result<TaskOutput> {
        let kind = request.kind();
        tracing::info!(task = kind.id(), uses_backend = kind.uses_backend(), "routing task");

        let output = match request {
            TaskRequest::Qa(prompt) => self.completion(kind, prompt, &token).await?,
            TaskRequest::Summarization(prompt) => self.completion(kind, prompt, &token).await?,
            TaskRequest::Translation(prompt) => self.completion(kind, prompt, &token).await?,
            TaskRequest::RolePlay(prompt) => self.completion(kind, prompt, &token).await?,
            TaskRequest::JsonFormatting(prompt) => self.completion(kind, prompt, &token).await?,
            TaskRequest::Classification(prompt) => self.completion(kind, prompt, &token).await?,
            TaskRequest::ChainOfThought(prompt) => self.completion(kind, prompt, &token).await?,
            TaskRequest::JsonValidation { input } => {
                TaskOutput::Validation(self.validator.validate(&input))
            }
            TaskRequest::RolePlayComparison { user_input, role } => {
                let role_conditioned = self
                    .send(RolePlayPrompt::new(user_input.clone(), role.clone()), &token)
                    .await;
                let general = self.send(QaPrompt::new(user_input), &token).await;
                TaskOutput::Comparison(RolePlayComparison::new(role, general, role_conditioned))
            }
        };

        Ok(output)
    }

    async fn completion<P: IntoPrompt>(
        &self,
        kind: TaskKind,
        prompt: P,
        token: &Option<CancellationToken>,
    ) -> Result<TaskOutput> {
        let text = self.send(prompt, token).await?;
        Ok(TaskOutput::Completion { kind, text })
    }

    async fn send<P: IntoPrompt>(
        &self,
        prompt: P,
        token: &Option<CancellationToken>,
    ) -> Result<SanitizedResult> {
        match token {
            Some(token) => self.client.run_cancellable(prompt, token.clone()).await,
            None => self.client.run(prompt).await,
        }
    }
}
