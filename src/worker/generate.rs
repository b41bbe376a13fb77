use tracing::debug;

use crate::ai::client::CompletionService;
use crate::ai::types::{ContentBlock, MessagesRequest, MessagesResponse};
use crate::errors::IcebreakerError;

/// Ask the completion service for a question and return its trimmed text.
///
/// # Errors
///
/// Propagates any service failure, and fails when the response carries no
/// usable text.
pub async fn generate_icebreaker(
    service: &dyn CompletionService,
    prompt: &str,
) -> Result<String, IcebreakerError> {
    let request = MessagesRequest::single_user_message(prompt);
    let response = service.create_message(&request).await?;
    debug!(
        "Completion returned {} content block(s), stop_reason={:?}",
        response.content.len(),
        response.stop_reason
    );
    first_text_segment(&response)
}

/// Only the first content block is consumed.
///
/// # Errors
///
/// Fails when there is no first block, it is not text, or it is blank.
pub fn first_text_segment(response: &MessagesResponse) -> Result<String, IcebreakerError> {
    match response.content.first() {
        Some(ContentBlock::Text { text }) => {
            let question = text.trim();
            if question.is_empty() {
                Err(IcebreakerError::Generation(
                    "Completion response text was empty".to_string(),
                ))
            } else {
                Ok(question.to_string())
            }
        }
        Some(ContentBlock::Other) => Err(IcebreakerError::Generation(
            "Completion response did not start with a text block".to_string(),
        )),
        None => Err(IcebreakerError::Generation(
            "Completion response contained no content".to_string(),
        )),
    }
}
