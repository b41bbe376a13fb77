//! Completion (Anthropic) API client module
//!
//! Encapsulates the single Messages API call used to generate a question.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::types::{ApiErrorResponse, Message, MessagesRequest, MessagesResponse, Role};
use crate::errors::IcebreakerError;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const MODEL: &str = "claude-sonnet-4-20250514";
pub const MAX_OUTPUT_TOKENS: u32 = 150;
pub const TEMPERATURE: f32 = 1.0;

/// A remote text-generation service.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// # Errors
    ///
    /// Returns [`IcebreakerError::Generation`] when the call fails for any reason.
    async fn create_message(
        &self,
        request: &MessagesRequest,
    ) -> Result<MessagesResponse, IcebreakerError>;
}

impl MessagesRequest {
    /// Request for the icebreaker model carrying `prompt` as the only user turn.
    #[must_use]
    pub fn single_user_message(prompt: &str) -> Self {
        Self {
            model: MODEL.to_string(),
            max_tokens: MAX_OUTPUT_TOKENS,
            temperature: Some(TEMPERATURE),
            messages: vec![Message {
                role: Role::User,
                content: prompt.to_string(),
            }],
        }
    }
}

/// Messages API client
pub struct AnthropicClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl AnthropicClient {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    #[must_use]
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self::with_http_client(api_key, base_url, Client::new())
    }

    /// Use a preconfigured HTTP client (proxy settings, custom roots).
    #[must_use]
    pub fn with_http_client(api_key: String, base_url: impl Into<String>, http: Client) -> Self {
        Self {
            http,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

#[async_trait]
impl CompletionService for AnthropicClient {
    async fn create_message(
        &self,
        request: &MessagesRequest,
    ) -> Result<MessagesResponse, IcebreakerError> {
        debug!(
            "Requesting completion from model {} (max_tokens={})",
            request.model, request.max_tokens
        );

        let response = self
            .http
            .post(self.messages_url())
            .header("x-api-key", self.api_key.as_str())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                IcebreakerError::Generation(format!("Completion API request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IcebreakerError::Generation(describe_api_error(
                status, &body,
            )));
        }

        response.json::<MessagesResponse>().await.map_err(|e| {
            IcebreakerError::Generation(format!("Failed to parse completion response: {e}"))
        })
    }
}

/// Prefer the API's own error message; fall back to the status and raw body.
fn describe_api_error(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => format!("{status} {}", body.trim()),
    }
}
