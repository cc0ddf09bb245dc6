use concierge_core::{
    error::Result,
    template::{IntoPrompt, RenderContext, RenderedPrompt, TemplateSpec},
};

pub const CHAIN_OF_THOUGHT: TemplateSpec = TemplateSpec::new(
    "chain_of_thought",
    r#"You are a world-class mathematician and teacher, known for your clarity and precision like Terence Tao or Richard Feynman.
Your task is to solve and explain the following problem using a highly detailed, step-by-step reasoning with a structured format.

**Guidelines:**
- Break the reasoning down into logical sections with headings.
- Explain concepts deeply, as if teaching someone with curiosity but no prior knowledge.
- Use formatting like **bold**, *italics*, bullet points, and headings (`###`) where appropriate.
- For math problems, write out all steps clearly.
- Show the logic behind each decision.
- Start with a **clear problem statement**.
- Use `###` headings for logical steps.
- Show intermediate calculations.
- **End with a clearly labeled and bold final answer like: `**Final Answer:** 33`.**

---

### Problem Statement
**{{ user_input }}**

---

### Step-by-step Reasoning

Let's work this out step by step.
"#,
    &["user_input"],
);

/// Step-by-step worked reasoning for math and logic problems.
#[derive(Debug, Clone)]
pub struct ChainOfThoughtPrompt {
    pub user_input: String,
}

impl ChainOfThoughtPrompt {
    pub fn new(user_input: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
        }
    }
}

impl IntoPrompt for ChainOfThoughtPrompt {
    fn into_prompt(self) -> Result<RenderedPrompt> {
        CHAIN_OF_THOUGHT.render(&RenderContext::new().with("user_input", self.user_input))
    }
}
