use std::future::Future;
use std::pin::Pin;

pub type SessionId = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub session_id: SessionId,
    pub command_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResponse {
    /// Written verbatim; carries its own line endings.
    pub output_text: String,
    pub clear_screen: bool,
}

impl CommandResponse {
    pub fn output(text: impl Into<String>) -> Self {
        Self {
            output_text: text.into(),
            clear_screen: false,
        }
    }

    pub fn clear_screen() -> Self {
        Self {
            output_text: String::new(),
            clear_screen: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// The executor could not be reached or dropped the request.
    Transport(String),
    /// The executor refused to run the command.
    Rejected(String),
}

impl std::fmt::Display for ExecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecError::Transport(msg) => write!(f, "command failed: {}", msg),
            ExecError::Rejected(msg) => write!(f, "command rejected: {}", msg),
        }
    }
}

impl std::error::Error for ExecError {}

pub type ExecOutcome = Result<CommandResponse, ExecError>;

pub type ExecFuture = Pin<Box<dyn Future<Output = ExecOutcome> + Send + 'static>>;

/// Runs submitted command lines somewhere else (a cluster sandbox, a mock).
///
/// Validation and safety filtering of `command_text` belong to the executor.
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, request: CommandRequest) -> ExecFuture;

    fn name(&self) -> &'static str;
}
