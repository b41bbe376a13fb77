//! Slack API client module
//!
//! Encapsulates the `chat.postMessage` call used to deliver the question.

use async_trait::async_trait;
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackClientHyperHttpsConnector};
use slack_morphism::prelude::SlackApiChatPostMessageRequest;
use slack_morphism::{
    SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackClient as SlackApiClient,
    SlackClientHttpConnector, SlackMessageContent,
};
use tracing::{debug, warn};

use crate::core::models::{OutgoingMessage, PostReceipt};
use crate::errors::IcebreakerError;

/// A remote chat service that can post a message to a channel.
#[async_trait]
pub trait MessagingService: Send + Sync {
    /// # Errors
    ///
    /// Returns [`IcebreakerError::Delivery`] when the post is rejected or fails.
    async fn post_message(
        &self,
        message: &OutgoingMessage,
    ) -> Result<PostReceipt, IcebreakerError>;
}

/// Builds the slack-morphism request for `message`.
#[must_use]
pub fn build_post_request(message: &OutgoingMessage) -> SlackApiChatPostMessageRequest {
    SlackApiChatPostMessageRequest::new(
        SlackChannelId(message.channel.clone()),
        SlackMessageContent::new().with_text(message.text.clone()),
    )
    .with_unfurl_links(message.unfurl_links)
}

/// Slack Web API client authenticated with a bot token
pub struct SlackClient<H = SlackClientHyperHttpsConnector>
where
    H: SlackClientHttpConnector + Send,
{
    client: Option<SlackApiClient<H>>,
    token: SlackApiToken,
}

impl SlackClient {
    /// Client for the public Slack API over HTTPS.
    ///
    /// Connector construction failures are not fatal here; they surface as a
    /// delivery error when a message is posted.
    #[must_use]
    pub fn new(token: String) -> Self {
        let client = match SlackClientHyperConnector::new() {
            Ok(connector) => Some(SlackApiClient::new(connector)),
            Err(e) => {
                warn!("Failed to create Slack HTTP connector: {}", e);
                None
            }
        };

        Self {
            client,
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
        }
    }
}

impl<H> SlackClient<H>
where
    H: SlackClientHttpConnector + Send + Sync,
{
    /// Client over a caller-supplied connector (custom API URL, plain HTTP).
    #[must_use]
    pub fn with_connector(token: String, connector: H) -> Self {
        Self {
            client: Some(SlackApiClient::new(connector)),
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
        }
    }
}

#[async_trait]
impl<H> MessagingService for SlackClient<H>
where
    H: SlackClientHttpConnector + Send + Sync,
{
    async fn post_message(
        &self,
        message: &OutgoingMessage,
    ) -> Result<PostReceipt, IcebreakerError> {
        let session = self
            .client
            .as_ref()
            .ok_or_else(|| {
                IcebreakerError::Delivery("Slack HTTP connector not initialized".to_string())
            })?
            .open_session(&self.token);

        debug!("Posting message to channel {}", message.channel);

        let post_req = build_post_request(message);
        let response = session.chat_post_message(&post_req).await?;

        Ok(PostReceipt {
            channel: response.channel.0,
            ts: response.ts.0,
        })
    }
}
