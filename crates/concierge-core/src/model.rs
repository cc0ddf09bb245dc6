//! Model identifiers used throughout the **concierge** workspace.
//!
//! Well-known local models get an enum variant so application code never
//! has to type literal tags such as `"gemma3:latest"`. Anything else travels
//! through [`Model::Custom`] untouched, which is what a model name read from
//! the environment ends up as.
//!
//! ```rust
//! use concierge_core::model::{Model, OllamaModel};
//!
//! assert_eq!(Model::from("gemma3:latest"), Model::Ollama(OllamaModel::Gemma3));
//! assert_eq!(Model::from("phi4:14b").to_string(), "phi4:14b");
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Universal identifier for the model a backend should run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Model {
    /// Built-in tags of models commonly pulled into a local Ollama install.
    Ollama(OllamaModel),
    /// Any other model tag, forwarded verbatim.
    Custom(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OllamaModel {
    Gemma3,
    Llama3_2,
    Mistral,
    Qwen2_5,
}

impl OllamaModel {
    pub const ALL: [OllamaModel; 4] = [
        OllamaModel::Gemma3,
        OllamaModel::Llama3_2,
        OllamaModel::Mistral,
        OllamaModel::Qwen2_5,
    ];

    /// Tag understood by the backend.
    pub fn tag(self) -> &'static str {
        match self {
            OllamaModel::Gemma3 => "gemma3:latest",
            OllamaModel::Llama3_2 => "llama3.2:latest",
            OllamaModel::Mistral => "mistral:latest",
            OllamaModel::Qwen2_5 => "qwen2.5:latest",
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Ollama(OllamaModel::Gemma3)
    }
}

impl From<OllamaModel> for Model {
    fn from(val: OllamaModel) -> Self {
        Model::Ollama(val)
    }
}

impl From<&str> for Model {
    fn from(value: &str) -> Self {
        OllamaModel::ALL
            .into_iter()
            .find(|known| known.tag() == value)
            .map(Model::Ollama)
            .unwrap_or_else(|| Model::Custom(value.to_owned()))
    }
}

impl From<String> for Model {
    fn from(value: String) -> Self {
        Model::from(value.as_str())
    }
}

impl From<Model> for String {
    fn from(value: Model) -> Self {
        value.to_string()
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Model::Ollama(model) => f.write_str(model.tag()),
            Model::Custom(tag) => f.write_str(tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_gemma3() {
        assert_eq!(Model::default().to_string(), "gemma3:latest");
    }

    #[test]
    fn serde_uses_the_plain_tag() {
        let json = serde_json::to_string(&Model::Ollama(OllamaModel::Mistral)).unwrap();
        assert_eq!(json, "\"mistral:latest\"");

        let parsed: Model = serde_json::from_str("\"my-finetune:7b\"").unwrap();
        assert_eq!(parsed, Model::Custom("my-finetune:7b".into()));
    }
}
