//! Builder‐style helper for constructing **Markdown prompts**.
//!
//! Writing verbose Markdown strings inline is tedious and error‐prone.
//! `PromptBuilder` offers a fluent API that lets you focus on the *content*
//! instead of the syntax. Every method returns `self`, enabling
//! call-chaining:
//!
//! ```rust
//! use concierge_prompt::builder::PromptBuilder;
//!
//! let md = PromptBuilder::new()
//!     .add_line("You are a concise assistant.")
//!     .add_dash_item("Answer in one sentence.")
//!     .add_blank_line()
//!     .add_delimiter()
//!     .add_raw("Q:")
//!     .finalize();
//!
//! assert_eq!(
//!     md,
//!     "You are a concise assistant.\n- Answer in one sentence.\n\n---\nQ:"
//! );
//! ```
//!
//! The builder performs **no validation** and no smart formatting: newlines
//! and whitespace are emitted exactly as requested.

use std::fmt::Display;

/// Fluent helper to produce markdown fragments.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you’re done, call [`Self::finalize`] to obtain the assembled markdown.
#[derive(Debug, Default)]
pub struct PromptBuilder {
    buffer: String,
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        self.buffer.push_str(&line.to_string());
        self.buffer.push('\n');
        self
    }

    /// Add a `- item` list entry.
    pub fn add_dash_item(self, item: impl Display) -> Self {
        self.add_line(format_args!("- {item}"))
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Insert a "---" delimiter.
    pub fn add_delimiter(self) -> Self {
        self.add_line("---")
    }

    /// Append raw text verbatim, without a trailing newline.
    pub fn add_raw(mut self, text: impl AsRef<str>) -> Self {
        self.buffer.push_str(text.as_ref());
        self
    }

    /// Retrieve the accumulated markdown and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}
