use std::fmt::Display;

use concierge_core::{sanitize::SanitizedResult, schema::ValidationResult, task::TaskKind};
use concierge_types::outputs::RolePlayComparison;

/// The typed result of one routed task.
#[derive(Debug)]
pub enum TaskOutput {
    /// A sanitized completion from the backend.
    Completion { kind: TaskKind, text: SanitizedResult },
    /// The local schema check of a JSON validation task.
    Validation(ValidationResult),
    Comparison(RolePlayComparison),
}

impl TaskOutput {
    pub fn kind(&self) -> TaskKind {
        match self {
            TaskOutput::Completion { kind, .. } => *kind,
            TaskOutput::Validation(_) => TaskKind::JsonValidation,
            TaskOutput::Comparison(_) => TaskKind::RolePlayComparison,
        }
    }

    pub fn completion(&self) -> Option<&SanitizedResult> {
        match self {
            TaskOutput::Completion { text, .. } => Some(text),
            _ => None,
        }
    }
}

impl Display for TaskOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Formatter output is shown pretty-printed when it parses. Key
            // order and number literals survive the round trip.
            TaskOutput::Completion {
                kind: TaskKind::JsonFormatting,
                text,
            } => match text.parse_json().and_then(|v| serde_json::to_string_pretty(&v).ok()) {
                Some(pretty) => f.write_str(&pretty),
                None => Display::fmt(text, f),
            },
            TaskOutput::Completion { text, .. } => Display::fmt(text, f),
            TaskOutput::Validation(result) => Display::fmt(result, f),
            TaskOutput::Comparison(comparison) => Display::fmt(comparison, f),
        }
    }
}
