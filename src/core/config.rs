use std::env;

/// Secrets and identifiers supplied by the scheduler's environment.
///
/// Nothing here is validated locally. A missing or wrong value surfaces as a
/// failure from the remote call that uses it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: String,
    pub slack_channel_id: String,
    pub anthropic_api_key: String,
}

impl AppConfig {
    /// Read the configuration, loading `.env` from the working directory first
    /// when one exists.
    #[must_use]
    pub fn from_env() -> Self {
        // A missing .env is the normal case under a scheduler.
        let _ = dotenvy::dotenv();

        Self {
            slack_bot_token: env::var("SLACK_BOT_TOKEN").unwrap_or_default(),
            slack_channel_id: env::var("SLACK_CHANNEL_ID").unwrap_or_default(),
            anthropic_api_key: env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
        }
    }
}
