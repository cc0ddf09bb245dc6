mod adapter;
mod provider_impl;

pub use adapter::{OllamaAdapter, OllamaAdapterBuilder};
pub mod api;
mod client;
pub mod error;

pub use client::OllamaClient;
