use concierge_core::task::TaskKind;
use concierge_types::{
    catalog::{Language, UnsupportedLanguage, find_profession},
    templates::{
        ChainOfThoughtPrompt, ClassificationMode, ClassificationPrompt, InvalidAxis,
        JsonFormattingPrompt, QaPrompt, RolePlayPrompt, ShotType, SummarizationPrompt,
        TranslationPrompt,
    },
};
use serde::{Deserialize, Serialize};

/// Why a selection could not be turned into a [`TaskRequest`].
///
/// Every variant displays with the `[Invalid Task]` prefix, so the edge can
/// show it as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("[Invalid Task]")]
    UnknownTask(String),

    #[error("[Invalid Task] {task} requires `{parameter}`")]
    MissingParameter {
        task: TaskKind,
        parameter: &'static str,
    },

    #[error("[Invalid Task] {0}")]
    UnsupportedLanguage(#[from] UnsupportedLanguage),

    #[error("[Invalid Task] unknown role `{0}`")]
    UnknownRole(String),

    #[error("[Invalid Task] {0}")]
    InvalidAxis(#[from] InvalidAxis),
}

/// What a front end submits: the selected task label, the free-text input
/// and whichever optional parameters the task's widgets collected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskSelection {
    pub task: String,
    pub input: String,
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
    pub role: Option<String>,
    pub classification_mode: Option<String>,
    pub shot_type: Option<String>,
}

impl TaskSelection {
    pub fn new(task: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn with_languages(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source_lang = Some(source.into());
        self.target_lang = Some(target.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_classification(
        mut self,
        mode: impl Into<String>,
        shot_type: impl Into<String>,
    ) -> Self {
        self.classification_mode = Some(mode.into());
        self.shot_type = Some(shot_type.into());
        self
    }
}

/// A fully validated task, one variant per [`TaskKind`].
#[derive(Debug, Clone)]
pub enum TaskRequest {
    Qa(QaPrompt),
    Summarization(SummarizationPrompt),
    Translation(TranslationPrompt),
    RolePlay(RolePlayPrompt),
    JsonFormatting(JsonFormattingPrompt),
    Classification(ClassificationPrompt),
    ChainOfThought(ChainOfThoughtPrompt),
    /// Checked locally against the configured schema.
    JsonValidation { input: String },
    RolePlayComparison { user_input: String, role: String },
}

impl TaskRequest {
    pub fn kind(&self) -> TaskKind {
        match self {
            TaskRequest::Qa(_) => TaskKind::Qa,
            TaskRequest::Summarization(_) => TaskKind::Summarization,
            TaskRequest::Translation(_) => TaskKind::Translation,
            TaskRequest::RolePlay(_) => TaskKind::RolePlay,
            TaskRequest::JsonFormatting(_) => TaskKind::JsonFormatting,
            TaskRequest::Classification(_) => TaskKind::Classification,
            TaskRequest::ChainOfThought(_) => TaskKind::ChainOfThought,
            TaskRequest::JsonValidation { .. } => TaskKind::JsonValidation,
            TaskRequest::RolePlayComparison { .. } => TaskKind::RolePlayComparison,
        }
    }

    /// Validate a loosely typed selection.
    ///
    /// Parameters a task does not use are ignored. Blank input counts as a
    /// missing `input` parameter, except for JSON validation, which passes
    /// the raw text to the validator.
    pub fn from_selection(selection: &TaskSelection) -> Result<Self, RouteError> {
        let kind: TaskKind = selection
            .task
            .parse()
            .map_err(|_| RouteError::UnknownTask(selection.task.clone()))?;

        // The validator reports blank text itself.
        if kind != TaskKind::JsonValidation && selection.input.trim().is_empty() {
            return Err(RouteError::MissingParameter {
                task: kind,
                parameter: "input",
            });
        }

        let input = selection.input.clone();

        let request = match kind {
            TaskKind::Qa => TaskRequest::Qa(QaPrompt::new(input)),
            TaskKind::Summarization => TaskRequest::Summarization(SummarizationPrompt::new(input)),
            TaskKind::Translation => {
                let source: Language = required(&selection.source_lang, kind, "source_lang")?.parse()?;
                let target: Language = required(&selection.target_lang, kind, "target_lang")?.parse()?;
                TaskRequest::Translation(TranslationPrompt::new(input, source, target))
            }
            TaskKind::RolePlay => {
                let role = profession(required(&selection.role, kind, "role")?)?;
                TaskRequest::RolePlay(RolePlayPrompt::new(input, role))
            }
            TaskKind::JsonFormatting => TaskRequest::JsonFormatting(JsonFormattingPrompt::new(input)),
            TaskKind::Classification => {
                let mode: ClassificationMode =
                    required(&selection.classification_mode, kind, "classification_mode")?.parse()?;
                let shot: ShotType = required(&selection.shot_type, kind, "shot_type")?.parse()?;
                TaskRequest::Classification(ClassificationPrompt::new(input, mode, shot))
            }
            TaskKind::ChainOfThought => TaskRequest::ChainOfThought(ChainOfThoughtPrompt::new(input)),
            TaskKind::JsonValidation => TaskRequest::JsonValidation { input },
            TaskKind::RolePlayComparison => TaskRequest::RolePlayComparison {
                user_input: input,
                role: profession(required(&selection.role, kind, "role")?)?.to_owned(),
            },
        };

        Ok(request)
    }
}

fn required<'s>(
    value: &'s Option<String>,
    task: TaskKind,
    parameter: &'static str,
) -> Result<&'s str, RouteError> {
    value
        .as_deref()
        .ok_or(RouteError::MissingParameter { task, parameter })
}

fn profession(role: &str) -> Result<&'static str, RouteError> {
    find_profession(role).ok_or_else(|| RouteError::UnknownRole(role.to_owned()))
}

impl TryFrom<&TaskSelection> for TaskRequest {
    type Error = RouteError;

    fn try_from(selection: &TaskSelection) -> Result<Self, Self::Error> {
        TaskRequest::from_selection(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_maps_to_its_kind() {
        for kind in TaskKind::ALL {
            let selection = TaskSelection::new(kind.label(), "input")
                .with_languages("English", "Urdu")
                .with_role("Doctor")
                .with_classification("Sentiment", "Few-Shot");
            assert_eq!(TaskRequest::from_selection(&selection).unwrap().kind(), kind);
        }
    }

    #[test]
    fn unknown_task_is_rejected() {
        let err = TaskRequest::from_selection(&TaskSelection::new("Poetry", "roses")).unwrap_err();
        assert_eq!(err, RouteError::UnknownTask("Poetry".into()));
        assert_eq!(err.to_string(), "[Invalid Task]");
    }

    #[test]
    fn missing_parameters_name_the_parameter() {
        let err =
            TaskRequest::from_selection(&TaskSelection::new("Translation", "Hello")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[Invalid Task] Translation requires `source_lang`"
        );

        let err = TaskRequest::from_selection(&TaskSelection::new("Q&A", "   ")).unwrap_err();
        assert_eq!(err.to_string(), "[Invalid Task] Q&A requires `input`");
    }

    #[test]
    fn blank_validator_input_reaches_the_validator() {
        let request =
            TaskRequest::from_selection(&TaskSelection::new("JSON Validator", "  ")).unwrap();
        assert!(matches!(request, TaskRequest::JsonValidation { ref input } if input == "  "));
    }

    #[test]
    fn parameters_outside_the_catalog_are_rejected() {
        let err = TaskRequest::from_selection(
            &TaskSelection::new("Translation", "Hello").with_languages("English", "Klingon"),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "[Invalid Task] unsupported language `Klingon`");

        let err = TaskRequest::from_selection(
            &TaskSelection::new("Role-Play", "Hello").with_role("Astronaut"),
        )
        .unwrap_err();
        assert_eq!(err, RouteError::UnknownRole("Astronaut".into()));

        let err = TaskRequest::from_selection(
            &TaskSelection::new("Classification", "Hello").with_classification("Topic", "Few-Shot"),
        )
        .unwrap_err();
        assert!(matches!(err, RouteError::InvalidAxis(_)));
    }

    #[test]
    fn comparison_uses_the_canonical_role_spelling() {
        let request = TaskRequest::from_selection(
            &TaskSelection::new("Role-Play Comparison", "Is coffee bad for me?").with_role("doctor"),
        )
        .unwrap();
        assert!(matches!(
            request,
            TaskRequest::RolePlayComparison { ref role, .. } if role == "Doctor"
        ));
    }

    #[test]
    fn selections_deserialize_with_absent_parameters() {
        let selection: TaskSelection =
            serde_json::from_str(r#"{ "task": "Q&A", "input": "Why is the sky blue?" }"#).unwrap();
        assert_eq!(selection, TaskSelection::new("Q&A", "Why is the sky blue?"));
    }
}
