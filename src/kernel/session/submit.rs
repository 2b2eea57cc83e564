use std::time::Instant;

use crate::kernel::progress;
use crate::kernel::services::ports::{CommandRequest, ExecOutcome};
use crate::kernel::Effect;

use super::{DispatchResult, PendingSubmission, TerminalSession};

impl TerminalSession {
    /// Commits the visible line and hands the command to the host.
    pub(super) fn submit(&mut self, out: &mut DispatchResult) {
        if self.pending.is_some() {
            tracing::debug!(session = %self.id, "submit ignored while command runs");
            return;
        }

        out.display.move_right(self.buffer.len() - self.cursor);
        out.display.write("\r\n");

        let command = self.line().trim().to_string();
        self.reset_line();

        if command.is_empty() {
            out.display.write(&self.config.prompt);
            return;
        }

        self.last_submission_id += 1;
        let submission_id = self.last_submission_id;
        self.pending = Some(PendingSubmission {
            id: submission_id,
            command: command.clone(),
            started_at: Instant::now(),
        });
        self.commands_executed += 1;
        self.history.append(&self.id, &command);

        tracing::debug!(session = %self.id, submission = submission_id, %command, "command submitted");
        out.effects.push(Effect::ExecuteCommand {
            submission_id,
            request: CommandRequest {
                session_id: self.id.clone(),
                command_text: command,
            },
        });
    }

    pub(super) fn finish_command(
        &mut self,
        submission_id: u64,
        outcome: ExecOutcome,
        out: &mut DispatchResult,
    ) {
        let pending = match self.pending.take() {
            Some(pending) if pending.id == submission_id => pending,
            other => {
                self.pending = other;
                tracing::debug!(
                    session = %self.id,
                    submission = submission_id,
                    "dropping stale command result"
                );
                return;
            }
        };
        let elapsed_ms = pending.started_at.elapsed().as_millis() as u64;

        match outcome {
            Ok(response) if response.clear_screen => {
                out.display.clear_screen();
            }
            Ok(response) => {
                out.display.write(&response.output_text);
                let next = progress::derive(
                    &self.config.progress_target,
                    &pending.command,
                    &response.output_text,
                    self.progress,
                );
                if next != self.progress {
                    tracing::info!(session = %self.id, from = self.progress, to = next, "progress advanced");
                    self.progress = next;
                    out.effects.push(Effect::ProgressChanged {
                        session_id: self.id.clone(),
                        progress: next,
                    });
                }
            }
            Err(err) => {
                tracing::warn!(session = %self.id, command = %pending.command, error = %err, "command failed");
                out.display.write(format!("Error: {err}\r\n"));
            }
        }
        out.display.write(&self.config.prompt);

        tracing::info!(
            session = %self.id,
            submission = submission_id,
            command = %pending.command,
            elapsed_ms,
            "command finished"
        );
    }
}
