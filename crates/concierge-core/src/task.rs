//! The closed set of tasks the engine knows how to run.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Qa,
    Summarization,
    Translation,
    RolePlay,
    JsonFormatting,
    Classification,
    ChainOfThought,
    JsonValidation,
    RolePlayComparison,
}

impl TaskKind {
    pub const ALL: [TaskKind; 9] = [
        TaskKind::Qa,
        TaskKind::Summarization,
        TaskKind::Translation,
        TaskKind::RolePlay,
        TaskKind::JsonFormatting,
        TaskKind::Classification,
        TaskKind::ChainOfThought,
        TaskKind::JsonValidation,
        TaskKind::RolePlayComparison,
    ];

    /// Human-facing name, as offered by a task selector.
    pub fn label(self) -> &'static str {
        match self {
            TaskKind::Qa => "Q&A",
            TaskKind::Summarization => "Summarization",
            TaskKind::Translation => "Translation",
            TaskKind::RolePlay => "Role-Play",
            TaskKind::JsonFormatting => "JSON Formatter",
            TaskKind::Classification => "Classification",
            TaskKind::ChainOfThought => "CoT Reasoning",
            TaskKind::JsonValidation => "JSON Validator",
            TaskKind::RolePlayComparison => "Role-Play Comparison",
        }
    }

    /// Stable machine identifier (matches the serde representation).
    pub fn id(self) -> &'static str {
        match self {
            TaskKind::Qa => "qa",
            TaskKind::Summarization => "summarization",
            TaskKind::Translation => "translation",
            TaskKind::RolePlay => "role_play",
            TaskKind::JsonFormatting => "json_formatting",
            TaskKind::Classification => "classification",
            TaskKind::ChainOfThought => "chain_of_thought",
            TaskKind::JsonValidation => "json_validation",
            TaskKind::RolePlayComparison => "role_play_comparison",
        }
    }

    /// `false` only for tasks answered locally without a backend call.
    pub fn uses_backend(self) -> bool {
        !matches!(self, TaskKind::JsonValidation)
    }
}

impl Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized task `{0}`")]
pub struct UnknownTask(pub String);

impl FromStr for TaskKind {
    type Err = UnknownTask;

    /// Accepts either the label or the identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TaskKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s || kind.id() == s)
            .ok_or_else(|| UnknownTask(s.to_owned()))
    }
}
