//! Unified error type exposed by **`concierge-core`**.
//!
//! Backend crates convert their internal errors into one of these variants
//! before bubbling them up to the [`ConciergeClient`](crate::ConciergeClient).
//! The `Display` output of the backend-facing variants is already the
//! user-visible diagnostic (`[Error <status>]: <body>` or
//! `[Exception]: <detail>`), so the edge layer only has to call
//! `to_string()`.

use std::time::Duration;

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ConciergeError>;

#[derive(Debug, Error)]
pub enum ConciergeError {
    /// The template declares `variable` as required but the render context
    /// carries no value for it.
    #[error("template `{template}` is missing required variable `{variable}`")]
    MissingVariable {
        template: &'static str,
        variable: String,
    },

    /// The template body references a placeholder that no context value
    /// resolves.
    #[error("template `{template}` has unresolved placeholder `{{{{ {placeholder} }}}}`")]
    UnresolvedPlaceholder {
        template: &'static str,
        placeholder: String,
    },

    /// The backend answered with a non-success status.
    #[error("[Error {status}]: {body}")]
    Status { status: u16, body: String },

    /// The call never produced a usable answer: unreachable host, broken
    /// connection, malformed body.
    #[error("[Exception]: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("[Exception]: request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("[Exception]: request was cancelled")]
    Cancelled,

    /// Failure while serialising or deserialising JSON payloads.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid: {0}")]
    Invalid(String),
}

impl ConciergeError {
    /// `true` for failures raised by the backend round trip rather than by
    /// prompt preparation.
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            ConciergeError::Status { .. }
                | ConciergeError::Transport(_)
                | ConciergeError::Timeout(_)
                | ConciergeError::Cancelled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_failures_render_edge_prefixes() {
        let status = ConciergeError::Status {
            status: 503,
            body: "overloaded".into(),
        };
        assert_eq!(status.to_string(), "[Error 503]: overloaded");

        let transport = ConciergeError::Transport("connection refused".into());
        assert_eq!(transport.to_string(), "[Exception]: connection refused");

        assert!(ConciergeError::Timeout(Duration::from_secs(2))
            .to_string()
            .starts_with("[Exception]"));
        assert!(ConciergeError::Cancelled.to_string().starts_with("[Exception]"));
    }

    #[test]
    fn unresolved_placeholder_names_the_marker() {
        let err = ConciergeError::UnresolvedPlaceholder {
            template: "qa",
            placeholder: "topic".into(),
        };
        assert_eq!(
            err.to_string(),
            "template `qa` has unresolved placeholder `{{ topic }}`"
        );
        assert!(!err.is_backend_failure());
    }
}
