//! Service ports: traits + data contracts.

pub mod executor;
pub mod history;
pub mod settings;

pub use executor::{
    CommandExecutor, CommandRequest, CommandResponse, ExecError, ExecFuture, ExecOutcome,
    SessionId,
};
pub use history::{HistoryError, HistoryStore};
pub use settings::{
    CompletionSettings, HistorySettings, ProgressSettings, Settings, DEFAULT_MAX_CANDIDATES,
    DEFAULT_PROMPT,
};
