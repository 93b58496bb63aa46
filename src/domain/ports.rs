use crate::domain::model::{Invoker, Platform};
use thiserror::Error;
use uuid::Uuid;

/// The platform oracle could not answer. There is no partial answer: any
/// failure means the platform stays unknown for this invocation.
#[derive(Debug, Error)]
#[error("platform classifier unavailable: {reason}")]
pub struct ClassifierError {
    pub reason: String,
}

impl ClassifierError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("syntax error: {0}")]
    Syntax(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Platform oracle, keyed by the player's stable identity.
pub trait PlatformClassifier: Send + Sync {
    fn classify(&self, player: Uuid) -> Result<Platform, ClassifierError>;
}

/// Execution substrate that parses and runs the transfer instruction under the
/// invoker's authority.
pub trait CommandExecutor: Send + Sync {
    fn submit(&self, instruction: &str, invoker: &Invoker) -> Result<i32, ExecuteError>;
}

/// Host-side view of a single command invocation: who invoked, plus the
/// feedback surface for reporting the outcome back to them.
pub trait Invocation {
    fn invoker(&self) -> &Invoker;
    fn report_info(&self, text: &str);
    fn report_error(&self, text: &str);
}

/// Status-returning handler bound to one command name at registration time.
pub type CommandHandler = Box<dyn Fn(&dyn Invocation) -> i32 + Send + Sync>;

/// The host's command-registration surface, fed once per configured command
/// during startup.
pub trait CommandRegistrar {
    fn register(&mut self, name: &str, handler: CommandHandler);
}
