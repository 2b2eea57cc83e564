//! Headless terminal core (session/action/effect).

pub mod action;
pub mod completion;
pub mod display;
pub mod effect;
pub mod input;
pub mod progress;
pub mod registry;
pub mod services;
pub mod session;

pub use action::Action;
pub use completion::{CommandCatalog, CompletionState};
pub use display::{encode_ansi, DisplayBatch, DisplayOp, VirtualScreen};
pub use effect::Effect;
pub use input::{InputEvent, InputParser};
pub use progress::{ProgressRule, ProgressTarget, MAX_PROGRESS};
pub use registry::{RegistryError, SessionRegistry};
pub use session::{
    DispatchResult, PendingSubmission, ReverseSearchState, SessionConfig, SessionMode,
    TerminalSession,
};
