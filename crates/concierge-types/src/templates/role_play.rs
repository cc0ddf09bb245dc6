use concierge_core::{
    error::Result,
    template::{IntoPrompt, RenderContext, RenderedPrompt, TemplateSpec},
};

use crate::catalog::RoleName;

pub const ROLE_PLAY: TemplateSpec = TemplateSpec::new(
    "role_play",
    r#"**System Prompt**
You are role-playing as a highly experienced and professional {{ role }}. Your responses must reflect the tone, knowledge, and manner expected from someone with years of experience in that role.

**Rules**:

* Use a tone appropriate to the {{ role }} (e.g., formal, empathetic, direct, etc.).
* Provide guidance, information, or advice based on the user's input, aligned with your {{ role }}'s domain.
* Be respectful, concise, and professional.
* If input is unclear or out of your expertise, respond with a general and safe reply.
* Do not break character.

**Preferred Response Format**:

* Start your answer with **{{ role_title }}:** followed by your reply.
* Avoid formatting like markdown or emojis unless natural to the role.

User: {{ user_input }}
{{ role_title }}:"#,
    &["user_input", "role", "role_title"],
);

/// Answer in character. The role name is case-normalized, so any spelling
/// of the same profession renders the same prompt.
#[derive(Debug, Clone)]
pub struct RolePlayPrompt {
    pub user_input: String,
    pub role: String,
}

impl RolePlayPrompt {
    pub fn new(user_input: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            role: role.into(),
        }
    }
}

impl IntoPrompt for RolePlayPrompt {
    fn into_prompt(self) -> Result<RenderedPrompt> {
        let role = RoleName::normalize(&self.role);
        let context = RenderContext::new()
            .with("user_input", self.user_input)
            .with("role", role.lower)
            .with("role_title", role.title);
        ROLE_PLAY.render(&context)
    }
}
