//! Sentiment / intent classification, zero- or few-shot.
//!
//! The template branches on two axes. Instead of conditional markup inside
//! the template text, every branch is a pure function of the axis variant
//! and the body is assembled with a [`PromptChain`]:
//!
//! ```text
//! persona(mode)
//! mode_guidance(mode)
//! shot_guidance(mode, shot)    worked examples only for `ShotType::Few`
//! label_format(mode)
//! cue(mode)                    "---\n\nQ: {{ user_input }}\nSentiment:"
//! ```

use std::{fmt::Display, str::FromStr};

use concierge_core::{
    error::Result,
    template::{IntoPrompt, RenderContext, RenderedPrompt, TemplateSpec},
};
use concierge_prompt::{builder::PromptBuilder, chain::PromptChain};
use serde::{Deserialize, Serialize};

pub const CLASSIFICATION_AXES: &[&str] = &["mode", "shot"];

const SENTIMENT_EXAMPLES: [(&str, &str); 8] = [
    ("I love how smooth and fast this app runs!", "Positive"),
    ("This is the worst service I've ever used.", "Negative"),
    ("It's okay, not bad but nothing special.", "Neutral"),
    (
        "Oh wow, this app crashes every time I open it. Amazing job.",
        "Negative",
    ),
    ("It's not terrible, just disappointingly mediocre.", "Neutral"),
    (
        "Woah, truly the best customer service experience of my life. Can't wait to see you again—this time in court.",
        "Negative",
    ),
    ("The food was edible. That's all I can say.", "Neutral"),
    (
        "Fantastic. Another crash right before my deadline. Love it.",
        "Negative",
    ),
];

const INTENT_EXAMPLES: [(&str, &str); 5] = [
    ("Can you tell me the weather in New York?", "Intent: Weather Inquiry"),
    ("I need to book a flight to London.", "Intent: Travel Booking"),
    ("What time is it in Tokyo?", "Intent: Time Lookup"),
    ("Please cancel my gym membership.", "Intent: Account Management"),
    ("Turn off the lights in the living room.", "Intent: Smart Home Control"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMode {
    Sentiment,
    Intent,
}

impl ClassificationMode {
    pub fn name(self) -> &'static str {
        match self {
            ClassificationMode::Sentiment => "sentiment",
            ClassificationMode::Intent => "intent",
        }
    }

    /// The label the answer must start with.
    pub fn label(self) -> &'static str {
        match self {
            ClassificationMode::Sentiment => "Sentiment",
            ClassificationMode::Intent => "Intent",
        }
    }

    fn examples(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ClassificationMode::Sentiment => &SENTIMENT_EXAMPLES,
            ClassificationMode::Intent => &INTENT_EXAMPLES,
        }
    }
}

impl Display for ClassificationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    Zero,
    Few,
}

impl Display for ShotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShotType::Zero => f.write_str("Zero-Shot"),
            ShotType::Few => f.write_str("Few-Shot"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {axis} `{value}`")]
pub struct InvalidAxis {
    pub axis: &'static str,
    pub value: String,
}

impl FromStr for ClassificationMode {
    type Err = InvalidAxis;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sentiment" => Ok(ClassificationMode::Sentiment),
            "intent" => Ok(ClassificationMode::Intent),
            _ => Err(InvalidAxis {
                axis: "classification mode",
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for ShotType {
    type Err = InvalidAxis;

    /// Accepts `zero`, `zero-shot`, `zero_shot` and the same for `few`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.strip_suffix("-shot").unwrap_or(&normalized) {
            "zero" => Ok(ShotType::Zero),
            "few" => Ok(ShotType::Few),
            _ => Err(InvalidAxis {
                axis: "shot type",
                value: s.to_owned(),
            }),
        }
    }
}

fn persona(mode: ClassificationMode) -> String {
    PromptBuilder::new()
        .add_line(format_args!(
            "You are an expert AI assistant specializing in {} classification.",
            mode.name()
        ))
        .add_dash_item("Your goal is to accurately classify user inputs based on the specified task.")
        .add_dash_item(
            "Carefully analyze both surface wording and the implied tone, purpose, or context.",
        )
        .finalize()
}

fn mode_guidance(mode: ClassificationMode) -> &'static str {
    match mode {
        ClassificationMode::Sentiment => {
            "- For **sentiment analysis**, detect subtle emotional cues such as sarcasm, irony, exaggeration, insincere praise, or passive-aggressive phrasing."
        }
        ClassificationMode::Intent => {
            "- For **intent classification**, infer the user's underlying purpose—even when phrased emotionally or indirectly."
        }
    }
}

fn worked_examples(mode: ClassificationMode) -> String {
    mode.examples()
        .iter()
        .fold(PromptChain::new(), |chain, (question, answer)| {
            chain.with(format!("Q: {question}\nA: {answer}"))
        })
        .build()
}

fn shot_guidance(mode: ClassificationMode, shot: ShotType) -> String {
    match shot {
        ShotType::Few => PromptBuilder::new()
            .add_dash_item(
                "Use the provided few-shot examples below to guide your interpretation and label formatting.",
            )
            .add_dash_item("Follow the structural and semantic pattern of the examples.")
            .add_blank_line()
            .add_line("Here are some examples:")
            .add_blank_line()
            .add_line(worked_examples(mode))
            .finalize(),
        ShotType::Zero => PromptBuilder::new()
            .add_dash_item(
                "No examples are provided. Use task understanding, reasoning, and linguistic analysis alone.",
            )
            .finalize(),
    }
}

fn label_format(mode: ClassificationMode) -> &'static str {
    match mode {
        ClassificationMode::Sentiment => {
            "- Your answer must begin with `Sentiment:` followed by one of the following labels: `Positive`, `Negative`, or `Neutral`.\n- Example: Sentiment: Negative"
        }
        ClassificationMode::Intent => {
            "- Your answer must begin with `Intent:` followed by the most appropriate label.\n- Example: Intent: Complaint"
        }
    }
}

fn cue(mode: ClassificationMode) -> String {
    PromptBuilder::new()
        .add_delimiter()
        .add_blank_line()
        .add_line("Q: {{ user_input }}")
        .add_raw(format!("{}:", mode.label()))
        .finalize()
}

/// The classification template for one point on the axes.
pub fn classification_template(mode: ClassificationMode, shot: ShotType) -> TemplateSpec {
    let body = PromptChain::new()
        .with(persona(mode))
        .with(mode_guidance(mode))
        .with(shot_guidance(mode, shot))
        .with(label_format(mode))
        .with(cue(mode))
        .build();

    TemplateSpec::assembled("classification", body, &["user_input"]).with_axes(CLASSIFICATION_AXES)
}

#[derive(Debug, Clone)]
pub struct ClassificationPrompt {
    pub user_input: String,
    pub mode: ClassificationMode,
    pub shot: ShotType,
}

impl ClassificationPrompt {
    pub fn new(user_input: impl Into<String>, mode: ClassificationMode, shot: ShotType) -> Self {
        Self {
            user_input: user_input.into(),
            mode,
            shot,
        }
    }
}

impl IntoPrompt for ClassificationPrompt {
    fn into_prompt(self) -> Result<RenderedPrompt> {
        classification_template(self.mode, self.shot)
            .render(&RenderContext::new().with("user_input", self.user_input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(mode: ClassificationMode, shot: ShotType) -> String {
        ClassificationPrompt::new("Great, another Monday.", mode, shot)
            .into_prompt()
            .unwrap()
            .into_inner()
    }

    #[test]
    fn few_shot_sentiment_embeds_examples_and_cue() {
        let prompt = render(ClassificationMode::Sentiment, ShotType::Few);

        assert!(prompt.starts_with(
            "You are an expert AI assistant specializing in sentiment classification.\n"
        ));
        assert!(prompt.contains("Here are some examples:"));
        assert!(prompt.contains("Q: I love how smooth and fast this app runs!\nA: Positive"));
        assert!(prompt.contains("Q: The food was edible. That's all I can say.\nA: Neutral"));
        assert!(!prompt.contains("Weather Inquiry"));
        assert!(prompt.ends_with("---\n\nQ: Great, another Monday.\nSentiment:"));
    }

    #[test]
    fn zero_shot_intent_has_no_worked_examples() {
        let prompt = render(ClassificationMode::Intent, ShotType::Zero);

        assert!(prompt.contains("No examples are provided."));
        assert!(!prompt.contains("Here are some examples:"));
        for (question, _) in INTENT_EXAMPLES.iter().chain(SENTIMENT_EXAMPLES.iter()) {
            assert!(!prompt.contains(question), "leaked example: {question}");
        }
        assert!(prompt.ends_with("Q: Great, another Monday.\nIntent:"));
        assert!(!prompt.contains("Sentiment:"));
    }

    #[test]
    fn few_shot_intent_uses_labelled_answers() {
        let prompt = render(ClassificationMode::Intent, ShotType::Few);
        assert!(prompt.contains("Q: Please cancel my gym membership.\nA: Intent: Account Management"));
        assert!(!prompt.contains("I love how smooth"));
    }

    #[test]
    fn prompt_wording_is_kept_verbatim() {
        let sentiment = render(ClassificationMode::Sentiment, ShotType::Few);
        assert!(sentiment.contains("Can't wait to see you again—this time in court.\nA: Negative"));

        let intent = render(ClassificationMode::Intent, ShotType::Zero);
        assert!(intent.contains(
            "infer the user's underlying purpose—even when phrased emotionally or indirectly."
        ));
    }

    #[test]
    fn every_axis_combination_renders_deterministically() {
        for mode in [ClassificationMode::Sentiment, ClassificationMode::Intent] {
            for shot in [ShotType::Zero, ShotType::Few] {
                assert_eq!(render(mode, shot), render(mode, shot));
                let spec = classification_template(mode, shot);
                assert_eq!(spec.axes, CLASSIFICATION_AXES);
                assert_eq!(spec.placeholders(), vec!["user_input"]);
            }
        }
    }

    #[test]
    fn axes_parse_from_selector_labels() {
        assert_eq!(
            "Sentiment".parse::<ClassificationMode>(),
            Ok(ClassificationMode::Sentiment)
        );
        assert_eq!("Few-Shot".parse::<ShotType>(), Ok(ShotType::Few));
        assert_eq!("zero_shot".parse::<ShotType>(), Ok(ShotType::Zero));
        assert!("many-shot".parse::<ShotType>().is_err());
        assert!("topic".parse::<ClassificationMode>().is_err());
    }
}
