/// Icebreaker - posts one LLM-generated icebreaker question to a Slack channel.
///
/// Each invocation runs a single linear pipeline, typically from a scheduler:
/// 1. Pick a topic category at random and build the prompt
/// 2. Ask the Anthropic Messages API for exactly one question
/// 3. Post the question to the configured Slack channel
///
/// # Architecture
///
/// The system uses:
/// - reqwest for the Anthropic Messages API
/// - slack-morphism for Slack API interactions
/// - rand for category selection
/// - Tokio for async runtime
///
/// Both remote services sit behind traits ([`ai::CompletionService`],
/// [`slack::MessagingService`]) so the [`worker::Runner`] can be driven by
/// test doubles.
///
/// # Example
///
/// ```no_run
/// use icebreaker::ai::AnthropicClient;
/// use icebreaker::core::config::AppConfig;
/// use icebreaker::slack::SlackClient;
/// use icebreaker::worker::Runner;
///
/// #[tokio::main]
/// async fn main() -> std::process::ExitCode {
///     icebreaker::setup_logging();
///
///     let config = AppConfig::from_env();
///     let completion = AnthropicClient::new(config.anthropic_api_key.clone());
///     let messaging = SlackClient::new(config.slack_bot_token.clone());
///
///     let mut runner = Runner::new(&completion, &messaging, config.slack_channel_id);
///     runner.execute(&mut rand::rng()).await.into()
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod slack;
pub mod worker;

pub use errors::IcebreakerError;

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::{MakeWriterExt, OrElse, WithMaxLevel};

/// Route WARN and ERROR events to `err` and everything else to `out`.
pub fn split_writer<O, E>(out: O, err: E) -> OrElse<WithMaxLevel<E>, O>
where
    O: for<'w> MakeWriter<'w>,
    E: for<'w> MakeWriter<'w>,
{
    err.with_max_level(Level::WARN).or_else(out)
}

/// Configure logging for a scheduled, single-shot run.
///
/// Progress (INFO and below) goes to stdout, warnings and errors to stderr.
/// The level defaults to `info` and can be overridden with `RUST_LOG`.
/// Calling this more than once is harmless; later calls are ignored.
///
/// # Example
///
/// ```
/// icebreaker::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(split_writer(std::io::stdout, std::io::stderr))
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
