use std::fmt::Display;

use concierge_core::{error::Result, sanitize::SanitizedResult};
use concierge_prompt::builder::PromptBuilder;

/// The same input answered twice: once as plain Q&A and once in character.
///
/// Each side keeps its own outcome, so a failed round trip on one side
/// still shows the other side's answer next to the failure text.
#[derive(Debug)]
pub struct RolePlayComparison {
    pub role: String,
    pub general: Result<SanitizedResult>,
    pub role_conditioned: Result<SanitizedResult>,
}

impl RolePlayComparison {
    pub fn new(
        role: impl Into<String>,
        general: Result<SanitizedResult>,
        role_conditioned: Result<SanitizedResult>,
    ) -> Self {
        Self {
            role: role.into(),
            general,
            role_conditioned,
        }
    }

    /// `true` when both round trips produced a completion.
    pub fn is_complete(&self) -> bool {
        self.general.is_ok() && self.role_conditioned.is_ok()
    }
}

fn side(outcome: &Result<SanitizedResult>) -> String {
    match outcome {
        Ok(text) => text.to_string(),
        Err(err) => err.to_string(),
    }
}

impl Display for RolePlayComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let block = PromptBuilder::new()
            .add_line("--- **Without Role Prompt (General QA)** ---")
            .add_line(side(&self.general))
            .add_blank_line()
            .add_line(format_args!("--- **With Role Prompt ({})** ---", self.role))
            .add_raw(side(&self.role_conditioned))
            .finalize();
        f.write_str(&block)
    }
}
