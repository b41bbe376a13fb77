//! All Slack-specific functionality

pub mod client;
pub mod message_formatter;

// Re-export main types for convenience
pub use client::{MessagingService, SlackClient};
pub use message_formatter::format_icebreaker_message;
