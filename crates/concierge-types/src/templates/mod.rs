//! The template library: one module per task.
//!
//! Plain templates are `const` [`TemplateSpec`]s with a fixed preamble
//! (persona, rules, output format) and a trailing cue that anchors where the
//! backend continues. Classification assembles its body from fragments, see
//! [`classification`].

mod chain_of_thought;
pub mod classification;
mod json_formatting;
mod qa;
mod role_play;
mod summarization;
mod translation;

pub use chain_of_thought::{CHAIN_OF_THOUGHT, ChainOfThoughtPrompt};
pub use classification::{
    CLASSIFICATION_AXES, ClassificationMode, ClassificationPrompt, InvalidAxis, ShotType,
    classification_template,
};
pub use json_formatting::{JSON_FORMATTING, JsonFormattingPrompt};
pub use qa::{QA, QaPrompt};
pub use role_play::{ROLE_PLAY, RolePlayPrompt};
pub use summarization::{SUMMARIZATION, SummarizationPrompt};
pub use translation::{TRANSLATION, TranslationPrompt};

use concierge_core::template::TemplateSpec;

/// Every template whose body is fixed at compile time.
pub const STATIC_TEMPLATES: [TemplateSpec; 6] = [
    QA,
    SUMMARIZATION,
    TRANSLATION,
    ROLE_PLAY,
    JSON_FORMATTING,
    CHAIN_OF_THOUGHT,
];

#[cfg(test)]
mod tests {
    use concierge_core::template::{IntoPrompt, RenderContext};

    use super::*;
    use crate::catalog::Language;

    #[test]
    fn declared_variables_match_placeholders() {
        for spec in STATIC_TEMPLATES {
            let mut declared = spec.variables.to_vec();
            let mut found = spec.placeholders();
            declared.sort_unstable();
            found.sort_unstable();
            assert_eq!(declared, found, "template `{}`", spec.name);
        }
    }

    #[test]
    fn every_template_ends_with_its_cue() {
        let input = "What is the boiling point of water?";
        let cues = [
            (QaPrompt::new(input).into_prompt(), "Q: What is the boiling point of water?\nA:"),
            (
                SummarizationPrompt::new(input).into_prompt(),
                "Text: What is the boiling point of water?\nSummary:",
            ),
            (
                TranslationPrompt::new(input, Language::English, Language::French).into_prompt(),
                "English: What is the boiling point of water?\nFrench:",
            ),
            (
                RolePlayPrompt::new(input, "Chef").into_prompt(),
                "User: What is the boiling point of water?\nChef:",
            ),
            (
                JsonFormattingPrompt::new(input).into_prompt(),
                "Input: What is the boiling point of water?\nJSON:",
            ),
            (
                ChainOfThoughtPrompt::new(input).into_prompt(),
                "### Step-by-step Reasoning\n\nLet's work this out step by step.\n",
            ),
        ];

        for (prompt, cue) in cues {
            let prompt = prompt.unwrap();
            assert!(prompt.as_str().ends_with(cue), "{prompt}");
            assert!(!prompt.as_str().contains("{{"), "{prompt}");
        }
    }

    #[test]
    fn role_name_case_does_not_change_the_prompt() {
        let upper = RolePlayPrompt::new("My head hurts.", "DOCTOR").into_prompt().unwrap();
        let lower = RolePlayPrompt::new("My head hurts.", "doctor").into_prompt().unwrap();
        let title = RolePlayPrompt::new("My head hurts.", "Doctor").into_prompt().unwrap();

        assert_eq!(upper, lower);
        assert_eq!(lower, title);
        assert!(upper.as_str().contains("professional doctor."));
        assert!(upper.as_str().contains("Start your answer with **Doctor:**"));
        assert!(upper.as_str().ends_with("User: My head hurts.\nDoctor:"));
    }

    #[test]
    fn translation_names_both_languages_in_the_persona() {
        let prompt = TranslationPrompt::new("Good morning", Language::Urdu, Language::Japanese)
            .into_prompt()
            .unwrap();
        assert!(prompt.as_str().contains("native-level proficiency in both Urdu and Japanese"));
        assert!(prompt.as_str().contains("closest natural equivalents** in Japanese"));
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let context = RenderContext::new().with("user_input", "Summarize the Rust book.");
        for spec in [QA, SUMMARIZATION, JSON_FORMATTING, CHAIN_OF_THOUGHT] {
            assert_eq!(spec.render(&context).unwrap(), spec.render(&context).unwrap());
        }
    }

    #[test]
    fn missing_language_variables_fail_fast() {
        let context = RenderContext::new().with("user_input", "Hello");
        assert!(TRANSLATION.render(&context).is_err());
    }
}
