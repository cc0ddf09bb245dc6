//! Template specifications and the placeholder renderer.
//!
//! A [`TemplateSpec`] is a named, process-wide constant: a skeleton text with
//! `{{ name }}` placeholders plus the list of variables a caller must supply.
//! Rendering substitutes a [`RenderContext`] into the skeleton and yields a
//! [`RenderedPrompt`]. The renderer is pure: identical inputs always produce
//! byte-identical output.
//!
//! Rendering fails fast instead of forwarding a half-filled prompt:
//!
//! * a required variable absent from the context is a
//!   [`ConciergeError::MissingVariable`],
//! * a placeholder in the body without a value is a
//!   [`ConciergeError::UnresolvedPlaceholder`].
//!
//! Substitution is a single pass. Values are inserted verbatim and never
//! re-scanned, so user text that happens to contain `{{ … }}` reaches the
//! backend unchanged.
//!
//! ```rust
//! use concierge_core::template::{RenderContext, TemplateSpec};
//!
//! const GREETING: TemplateSpec = TemplateSpec::new(
//!     "greeting",
//!     "Say hello to {{ name }}.\nA:",
//!     &["name"],
//! );
//!
//! let prompt = GREETING
//!     .render(&RenderContext::new().with("name", "Ada"))
//!     .unwrap();
//! assert_eq!(prompt.as_str(), "Say hello to Ada.\nA:");
//! ```

use std::{borrow::Cow, collections::BTreeMap, fmt::Display, sync::LazyLock};

use regex::Regex;

use crate::error::{ConciergeError, Result};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
});

/// A named prompt skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    pub name: &'static str,
    pub body: Cow<'static, str>,
    /// Variables every render context must provide.
    pub variables: &'static [&'static str],
    /// Conditional axes the template branches on. Empty for plain
    /// substitution templates.
    pub axes: &'static [&'static str],
}

impl TemplateSpec {
    pub const fn new(
        name: &'static str,
        body: &'static str,
        variables: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            body: Cow::Borrowed(body),
            variables,
            axes: &[],
        }
    }

    /// A template whose body is assembled at runtime, e.g. from fragments
    /// selected by the template's axes.
    pub fn assembled(
        name: &'static str,
        body: String,
        variables: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            body: Cow::Owned(body),
            variables,
            axes: &[],
        }
    }

    pub fn with_axes(mut self, axes: &'static [&'static str]) -> Self {
        self.axes = axes;
        self
    }

    /// Names of the placeholders that occur in the body, in order of first
    /// appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for captures in PLACEHOLDER.captures_iter(&self.body) {
            if let Some(name) = captures.get(1).map(|m| m.as_str()) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute `context` into the body.
    pub fn render(&self, context: &RenderContext) -> Result<RenderedPrompt> {
        render_text(self.name, &self.body, self.variables, context)
    }
}

/// Render a body against `context`, requiring every name in `variables`.
pub fn render_text(
    template: &'static str,
    body: &str,
    variables: &[&str],
    context: &RenderContext,
) -> Result<RenderedPrompt> {
    if let Some(missing) = variables.iter().find(|v| !context.contains(v)) {
        return Err(ConciergeError::MissingVariable {
            template,
            variable: (*missing).to_owned(),
        });
    }

    let mut rendered = String::with_capacity(body.len() + context.value_len());
    let mut cursor = 0;

    for captures in PLACEHOLDER.captures_iter(body) {
        let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        let value = context
            .get(name.as_str())
            .ok_or_else(|| ConciergeError::UnresolvedPlaceholder {
                template,
                placeholder: name.as_str().to_owned(),
            })?;

        rendered.push_str(&body[cursor..whole.start()]);
        rendered.push_str(value);
        cursor = whole.end();
    }
    rendered.push_str(&body[cursor..]);

    Ok(RenderedPrompt(rendered))
}

/// Variable name → value mapping for a single render call.
///
/// Backed by a `BTreeMap` so iteration order (and therefore `Debug` output)
/// is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext(BTreeMap<String, String>);

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    fn value_len(&self) -> usize {
        self.0.values().map(String::len).sum()
    }
}

/// The final prompt text, ready to be sent to a backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderedPrompt(String);

impl RenderedPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for RenderedPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RenderedPrompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Turns a task-specific prompt value into a [`RenderedPrompt`].
///
/// Implementors pick their [`TemplateSpec`], build the [`RenderContext`] from
/// their own fields and render. The client accepts any `IntoPrompt`, so new
/// prompt kinds plug in without touching the transport layer.
pub trait IntoPrompt {
    fn into_prompt(self) -> Result<RenderedPrompt>;
}

/// A pre-rendered prompt passes through untouched.
impl IntoPrompt for RenderedPrompt {
    fn into_prompt(self) -> Result<RenderedPrompt> {
        Ok(self)
    }
}

/// A piece of prompt text that can be concatenated with others.
pub trait IntoFragment {
    fn into_fragment(self) -> String;
}

impl IntoFragment for &str {
    fn into_fragment(self) -> String {
        self.to_owned()
    }
}

impl IntoFragment for String {
    fn into_fragment(self) -> String {
        self
    }
}
