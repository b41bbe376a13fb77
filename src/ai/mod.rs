//! All AI/LLM functionality

pub mod categories;
pub mod client;
pub mod prompt_builder;
pub mod types;

// Re-export main types for convenience
pub use categories::{Category, pick_category};
pub use client::{AnthropicClient, CompletionService};
pub use prompt_builder::build_prompt;
pub use types::{ContentBlock, MessagesRequest, MessagesResponse};
