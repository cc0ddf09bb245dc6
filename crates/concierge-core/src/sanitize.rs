//! Stop-marker truncation of raw completions.
//!
//! A text-completion backend happily keeps going after the answer it was
//! asked for and invents the next `Q:`/`A:` turn. The sanitizer cuts the
//! completion right before the earliest stop marker so exactly one turn
//! survives.

use std::fmt::Display;

/// Markers scanned for, in this order.
pub const STOP_MARKERS: [&str; 5] = ["\nQ:", "\nA:", "\n\n", "\nQ: ", "Q: "];

/// Shown instead of blank output.
pub const EMPTY_RESPONSE: &str = "[Empty response]";

#[derive(Debug, Clone)]
pub struct Sanitizer {
    markers: Vec<String>,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::with_markers(STOP_MARKERS)
    }
}

impl Sanitizer {
    pub fn with_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(Into::into)
                .filter(|m: &String| !m.is_empty())
                .collect(),
        }
    }

    pub fn sanitize(&self, raw: &str) -> SanitizedResult {
        let text = raw.trim();

        // On equal positions the marker listed first wins.
        let cut = self
            .markers
            .iter()
            .filter_map(|marker| text.find(marker.as_str()))
            .min();

        let text = match cut {
            Some(pos) => text[..pos].trim(),
            None => text,
        };

        if text.is_empty() {
            SanitizedResult(EMPTY_RESPONSE.to_owned())
        } else {
            SanitizedResult(text.to_owned())
        }
    }
}

/// A completion after stop-marker truncation; never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedResult(String);

impl SanitizedResult {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// `true` when nothing survived truncation.
    pub fn is_empty_response(&self) -> bool {
        self.0 == EMPTY_RESPONSE
    }

    /// Interpret the completion as JSON, e.g. the output of the JSON
    /// formatting task.
    pub fn parse_json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.0).ok()
    }
}

impl Display for SanitizedResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize(raw: &str) -> String {
        Sanitizer::default().sanitize(raw).into_inner()
    }

    #[test]
    fn truncates_hallucinated_follow_up_question() {
        assert_eq!(
            sanitize("Paris is the capital.\nQ: next question"),
            "Paris is the capital."
        );
    }

    #[test]
    fn whitespace_only_becomes_sentinel() {
        let result = Sanitizer::default().sanitize("   ");
        assert_eq!(result.as_str(), "[Empty response]");
        assert!(result.is_empty_response());
    }

    #[test]
    fn text_without_markers_is_only_trimmed() {
        assert_eq!(
            sanitize("  Bonjour, comment allez-vous ?\n"),
            "Bonjour, comment allez-vous ?"
        );
    }

    #[test]
    fn earliest_marker_wins_regardless_of_list_order() {
        // "\n\n" occurs before "\nQ:" even though it is checked later.
        assert_eq!(sanitize("Answer.\n\nMore text\nQ: again"), "Answer.");
        assert_eq!(sanitize("Sentiment: Negative\nA: Positive"), "Sentiment: Negative");
    }

    #[test]
    fn leading_marker_leaves_nothing() {
        assert_eq!(sanitize("Q: What now?\nA: Nothing"), EMPTY_RESPONSE);
    }

    #[test]
    fn inner_question_marker_without_newline_still_cuts() {
        assert_eq!(sanitize("Four. Q: What is 3+3?"), "Four.");
    }

    #[test]
    fn json_completion_parses() {
        let result = Sanitizer::default().sanitize("{\"name\": \"Ada\"}");
        assert_eq!(result.parse_json().unwrap()["name"], "Ada");
        assert!(Sanitizer::default().sanitize("not json").parse_json().is_none());
    }
}
