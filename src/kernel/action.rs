use crate::kernel::input::InputEvent;
use crate::kernel::services::ports::ExecOutcome;

#[derive(Debug, Clone)]
pub enum Action {
    Input(InputEvent),
    CommandFinished {
        submission_id: u64,
        outcome: ExecOutcome,
    },
}
