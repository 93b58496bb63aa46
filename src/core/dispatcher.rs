use crate::core::resolve::resolve;
use crate::domain::ports::{CommandExecutor, ExecuteError, Invocation, PlatformClassifier};

/// Terminal result of one invocation. Every path through `handle` ends in
/// exactly one of these; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Submission succeeded with the substrate's own result code.
    Success(i32),
    /// Submission was accepted but the substrate signaled a no-op.
    Neutral,
    /// Invoked from the console or another non-player source.
    NotPlayer,
    /// The platform oracle failed; no default platform is assumed.
    ClassifierUnavailable,
    /// The substrate rejected the instruction text.
    Syntax,
    /// Any other submission failure; detail goes to the log, not the invoker.
    Unexpected,
}

impl Outcome {
    /// Status code handed back to the host's dispatch machinery. Only a
    /// successful submission carries a meaningful code.
    pub fn status(&self) -> i32 {
        match self {
            Outcome::Success(code) => *code,
            _ => 0,
        }
    }
}

/// Resolve-and-execute engine over the two injected capabilities.
pub struct Dispatcher<C, E> {
    classifier: C,
    executor: E,
}

impl<C: PlatformClassifier, E: CommandExecutor> Dispatcher<C, E> {
    pub fn new(classifier: C, executor: E) -> Self {
        Self {
            classifier,
            executor,
        }
    }

    /// Handles one invocation of a configured command: identity check,
    /// platform classification, endpoint resolution, then submission.
    /// All failures are reported to the invoker here and never escape as
    /// faults into the host.
    pub fn handle(
        &self,
        invocation: &dyn Invocation,
        explicit_ip: Option<&str>,
        explicit_port: Option<u16>,
    ) -> Outcome {
        let invoker = invocation.invoker();
        let Some(player_id) = invoker.player_id() else {
            invocation.report_error("Only players can run this command.");
            return Outcome::NotPlayer;
        };

        let platform = match self.classifier.classify(player_id) {
            Ok(platform) => platform,
            Err(err) => {
                tracing::warn!(player = %player_id, "platform classification failed: {err}");
                invocation.report_error("Platform service not available.");
                return Outcome::ClassifierUnavailable;
            }
        };

        let endpoint = resolve(explicit_ip, explicit_port, platform);
        let instruction = endpoint.transfer_instruction();
        tracing::debug!(player = %player_id, ?platform, %instruction, "submitting transfer");

        match self.executor.submit(&instruction, invoker) {
            Ok(0) => {
                invocation.report_info(&format!("Transfer command returned 0: {instruction}"));
                Outcome::Neutral
            }
            Ok(code) => Outcome::Success(code),
            Err(ExecuteError::Syntax(message)) => {
                invocation.report_error(&format!("Syntax error: {message}"));
                Outcome::Syntax
            }
            Err(ExecuteError::Other(err)) => {
                tracing::error!(player = %player_id, %instruction, "transfer submission failed: {err:#}");
                invocation.report_error("Unexpected error. See server log.");
                Outcome::Unexpected
            }
        }
    }
}
