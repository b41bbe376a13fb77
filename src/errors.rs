use slack_morphism::errors::SlackClientError;
use thiserror::Error;

/// Failures that end a run. Both kinds are fatal and map to the same exit code.
///
/// The display form is the bare message reported by the remote service so the
/// runner can log it as `Error: <message>`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IcebreakerError {
    /// The completion service call failed or returned nothing usable.
    #[error("{0}")]
    Generation(String),

    /// The messaging service rejected the post or could not be reached.
    #[error("{0}")]
    Delivery(String),
}

impl IcebreakerError {
    #[must_use]
    pub fn is_generation(&self) -> bool {
        matches!(self, IcebreakerError::Generation(_))
    }

    #[must_use]
    pub fn is_delivery(&self) -> bool {
        matches!(self, IcebreakerError::Delivery(_))
    }
}

impl From<SlackClientError> for IcebreakerError {
    fn from(error: SlackClientError) -> Self {
        match error {
            // Slack reports failures as short codes such as `channel_not_found`.
            SlackClientError::ApiError(api_error) => IcebreakerError::Delivery(api_error.code),
            other => IcebreakerError::Delivery(other.to_string()),
        }
    }
}
