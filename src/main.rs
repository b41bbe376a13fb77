use std::process::ExitCode;

use icebreaker::ai::AnthropicClient;
use icebreaker::core::config::AppConfig;
use icebreaker::slack::SlackClient;
use icebreaker::worker::Runner;

#[tokio::main]
async fn main() -> ExitCode {
    icebreaker::setup_logging();

    let config = AppConfig::from_env();
    let completion = AnthropicClient::new(config.anthropic_api_key.clone());
    let messaging = SlackClient::new(config.slack_bot_token.clone());

    let mut rng = rand::rng();
    let mut runner = Runner::new(&completion, &messaging, config.slack_channel_id);
    runner.execute(&mut rng).await.into()
}
