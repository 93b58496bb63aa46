use uuid::Uuid;

/// Client platform of a connected player, as reported by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Java,
    Bedrock,
}

impl Platform {
    pub fn is_bedrock(self) -> bool {
        matches!(self, Platform::Bedrock)
    }
}

/// The actor behind a command invocation. Only a connected player can be
/// transferred; the console has no session to redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invoker {
    Player { id: Uuid, name: String },
    Console,
}

impl Invoker {
    pub fn player(id: Uuid, name: impl Into<String>) -> Self {
        Invoker::Player {
            id,
            name: name.into(),
        }
    }

    pub fn player_id(&self) -> Option<Uuid> {
        match self {
            Invoker::Player { id, .. } => Some(*id),
            Invoker::Console => None,
        }
    }
}

/// Target endpoint computed for one invocation. Never partial: resolution
/// always fills both fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    pub host: String,
    pub port: u16,
}

impl ResolvedEndpoint {
    /// Exact text the execution substrate parses; changing this breaks the
    /// downstream parser.
    pub fn transfer_instruction(&self) -> String {
        format!("transfer {} {}", self.host, self.port)
    }
}
