pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod sanitize;
pub mod schema;
pub mod task;
pub mod template;

pub use client::ConciergeClient;
