//! # `concierge` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the building-block
//! crates in the workspace and adds the task router on top:
//!
//! | Crate                   | What it provides                                                              |
//! |-------------------------|-------------------------------------------------------------------------------|
//! | **`concierge-core`**    | Renderer, provider trait, generic client, sanitizer, schema validator, errors |
//! | **`concierge-prompt`**  | Markdown `PromptBuilder` and `PromptChain` fragment composition               |
//! | **`concierge-types`**   | The per-task template library, catalogs, comparison output                    |
//! | **`concierge-ollama`**  | HTTP adapter for an Ollama-style `/api/generate` endpoint *(optional)*        |
//!
//! The `ollama` feature is on by default. Turn it off to stay
//! backend-agnostic and plug in your own
//! [`CompletionProvider`](provider::CompletionProvider).
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use concierge::{ollama::OllamaAdapterBuilder, router::{TaskRouter, TaskSelection}};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = OllamaAdapterBuilder::new_from_env().build()?;
//!     let router = TaskRouter::new(backend);
//!
//!     let selection = TaskSelection::new("Translation", "Where is the station?")
//!         .with_languages("English", "French");
//!     println!("{}", router.route(&selection).await);
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/concierge/latest")]

pub mod router;

pub use concierge_core::*;
pub use concierge_prompt as prompt;
pub use concierge_types as types;

#[cfg(feature = "ollama")]
pub use concierge_ollama as ollama;
