use tracing::info;

use crate::core::models::{OutgoingMessage, PostReceipt};
use crate::errors::IcebreakerError;
use crate::slack::client::MessagingService;
use crate::slack::message_formatter::format_icebreaker_message;

/// Build the announcement for `question`, addressed to `channel_id`.
#[must_use]
pub fn build_icebreaker_message(channel_id: &str, question: &str) -> OutgoingMessage {
    OutgoingMessage {
        channel: channel_id.to_string(),
        text: format_icebreaker_message(question),
        unfurl_links: false,
    }
}

/// Post the question to `channel_id`.
///
/// # Errors
///
/// Propagates the messaging service failure unchanged.
pub async fn deliver_icebreaker(
    service: &dyn MessagingService,
    channel_id: &str,
    question: &str,
) -> Result<PostReceipt, IcebreakerError> {
    let message = build_icebreaker_message(channel_id, question);
    let receipt = service.post_message(&message).await?;

    info!("Message sent to channel {}: {}", channel_id, receipt.ts);
    Ok(receipt)
}
