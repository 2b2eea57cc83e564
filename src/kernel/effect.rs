use crate::kernel::services::ports::{CommandRequest, SessionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ExecuteCommand {
        submission_id: u64,
        request: CommandRequest,
    },
    ProgressChanged {
        session_id: SessionId,
        progress: u8,
    },
}
