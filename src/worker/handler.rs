use std::process::ExitCode;

use rand::Rng;
use tracing::{debug, error, info};

use super::deliver::deliver_icebreaker;
use super::generate::generate_icebreaker;
use crate::ai::categories::pick_category;
use crate::ai::client::CompletionService;
use crate::ai::prompt_builder::build_prompt;
use crate::core::models::PostReceipt;
use crate::errors::IcebreakerError;
use crate::slack::client::MessagingService;

/// Pipeline position of a [`Runner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Start,
    Generating,
    Generated,
    Sending,
    Done,
    Failed,
}

/// Process-level outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failure,
}

impl RunStatus {
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Failure => 1,
        }
    }
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Generates one icebreaker and posts it, single attempt.
pub struct Runner<'a> {
    completion: &'a dyn CompletionService,
    messaging: &'a dyn MessagingService,
    channel_id: String,
    state: RunState,
}

impl<'a> Runner<'a> {
    pub fn new(
        completion: &'a dyn CompletionService,
        messaging: &'a dyn MessagingService,
        channel_id: impl Into<String>,
    ) -> Self {
        Self {
            completion,
            messaging,
            channel_id: channel_id.into(),
            state: RunState::Start,
        }
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    fn transition(&mut self, next: RunState) {
        debug!("Runner state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn fail(&mut self, error: IcebreakerError) -> IcebreakerError {
        self.transition(RunState::Failed);
        error
    }

    /// Run the pipeline once.
    ///
    /// # Errors
    ///
    /// Returns the first generation or delivery failure. The runner is left
    /// in [`RunState::Failed`] and the messaging service is not called after
    /// a generation failure.
    pub async fn run<R: Rng>(&mut self, rng: &mut R) -> Result<PostReceipt, IcebreakerError> {
        self.transition(RunState::Generating);
        info!("Generating icebreaker question...");

        let category = pick_category(rng);
        debug!("Selected category: {}", category);
        let prompt = build_prompt(category);

        let generated = generate_icebreaker(self.completion, &prompt).await;
        let question = match generated {
            Ok(question) => question,
            Err(e) => return Err(self.fail(e)),
        };
        self.transition(RunState::Generated);
        info!("Generated: {}", question);

        self.transition(RunState::Sending);
        info!("Sending to Slack...");
        let delivered = deliver_icebreaker(self.messaging, &self.channel_id, &question).await;
        let receipt = match delivered {
            Ok(receipt) => receipt,
            Err(e) => return Err(self.fail(e)),
        };

        self.transition(RunState::Done);
        info!("Done!");
        Ok(receipt)
    }

    /// Run the pipeline and report the outcome as a process status.
    pub async fn execute<R: Rng>(&mut self, rng: &mut R) -> RunStatus {
        match self.run(rng).await {
            Ok(_) => RunStatus::Success,
            Err(e) => {
                error!("Error: {}", e);
                RunStatus::Failure
            }
        }
    }
}
