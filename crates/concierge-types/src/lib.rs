//! Task-specific prompt templates and the value types that flow around them.
//!
//! * [`templates`] – one module per task; each exposes its [`TemplateSpec`]
//!   constant and a prompt struct implementing [`IntoPrompt`].
//! * [`catalog`] – the fixed choices a front end offers (languages,
//!   professions) and role-name normalization.
//! * [`outputs`] – composite results such as the role-play comparison.
//!
//! [`TemplateSpec`]: concierge_core::template::TemplateSpec
//! [`IntoPrompt`]: concierge_core::template::IntoPrompt
pub mod catalog;
pub mod outputs;
pub mod templates;
