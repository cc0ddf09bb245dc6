//! Simple **builder** that concatenates prompt fragments.
//!
//! ```text
//! ┌────────────────┐   IntoFragment    ┌──────────┐
//! │ persona        │ ─────────────────►│ String   │
//! ├────────────────┤                   ├──────────┤
//! │ mode guidance  │ ─────────────────►│ String   │
//! ├────────────────┤                   ├──────────┤
//! │ …              │ ─────────────────►│ String   │
//! └────────────────┘                   └──────────┘
//!            ▲                                │
//!            └──────── PromptChain::build() ◄─┘
//! ```
//!
//! Prompts that branch on parameters are easier to read as a straight line
//! of small pure fragments than as a template with conditional markup.
//! `PromptChain` lines them up and joins them with a blank line. Empty
//! fragments are skipped so optional parts do not leave stray separators.
//!
//! ```rust
//! use concierge_prompt::chain::PromptChain;
//!
//! let text = PromptChain::new()
//!     .with("You are a classifier.")
//!     .with(String::new())
//!     .with("Q: {{ user_input }}")
//!     .build();
//!
//! assert_eq!(text, "You are a classifier.\n\nQ: {{ user_input }}");
//! ```
use concierge_core::template::IntoFragment;

const SEPARATOR: &str = "\n\n";

/// Lightweight container that accumulates fragments produced by
/// [`IntoFragment`] implementors.
#[derive(Debug, Default)]
pub struct PromptChain(Vec<String>);

impl PromptChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment to the chain.
    pub fn with(mut self, fragment: impl IntoFragment) -> Self {
        let fragment = fragment.into_fragment();
        let trimmed = fragment.trim_end_matches('\n');
        if !trimmed.trim().is_empty() {
            self.0.push(trimmed.to_owned());
        }
        self
    }

    /// Consume the builder and join the fragments.
    pub fn build(self) -> String {
        self.0.join(SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_newlines_do_not_double_separators() {
        let text = PromptChain::new().with("first\n").with("second\n\n").build();
        assert_eq!(text, "first\n\nsecond");
    }

    #[test]
    fn empty_chain_builds_empty_string() {
        assert_eq!(PromptChain::new().build(), "");
    }
}
