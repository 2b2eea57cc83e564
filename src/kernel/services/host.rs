//! Drives sessions against an executor.
//!
//! Input is handled synchronously on the caller's thread. Executor calls run
//! on the tokio runtime and their results come back over the host bus; the
//! owner applies them with `drain_completions` or `next_completion`.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::error::TryRecvError;

use crate::kernel::registry::{self, SessionRegistry};
use crate::kernel::session::{DispatchResult, SessionConfig, TerminalSession};
use crate::kernel::{Action, Effect};

use super::bus::{host_bus, HostBusReceiver, HostBusSender, HostMessage};
use super::ports::{CommandExecutor, CommandRequest, HistoryStore, SessionId};

/// Display output and effects produced for one session.
#[derive(Debug)]
pub struct SessionOutput {
    pub session_id: SessionId,
    pub result: DispatchResult,
}

pub struct TerminalHost {
    registry: SessionRegistry,
    config: Arc<SessionConfig>,
    executor: Arc<dyn CommandExecutor>,
    history: Arc<dyn HistoryStore>,
    runtime: Handle,
    bus: HostBusSender,
    rx: HostBusReceiver,
    next_generation: u64,
}

impl TerminalHost {
    pub fn new(
        config: SessionConfig,
        executor: Arc<dyn CommandExecutor>,
        history: Arc<dyn HistoryStore>,
        runtime: Handle,
    ) -> Self {
        let (bus, rx) = host_bus();
        tracing::debug!(
            executor = executor.name(),
            history = history.name(),
            "terminal host created"
        );
        Self {
            registry: SessionRegistry::new(),
            config: Arc::new(config),
            executor,
            history,
            runtime,
            bus,
            rx,
            next_generation: 0,
        }
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    pub fn session(&self, id: &str) -> Option<&TerminalSession> {
        self.registry.get(id)
    }

    /// Opens a session and returns its banner and first prompt.
    ///
    /// Each open gets a fresh generation; results addressed to an earlier
    /// view with the same id are dropped.
    pub fn open_session(&mut self, id: impl Into<SessionId>) -> registry::Result<DispatchResult> {
        self.next_generation += 1;
        let session = TerminalSession::new(id, Arc::clone(&self.config), Arc::clone(&self.history))
            .with_generation(self.next_generation);
        Ok(self.registry.insert(session)?.open())
    }

    /// In-flight results for a closed session are dropped when they arrive.
    pub fn close_session(&mut self, id: &str) -> bool {
        match self.registry.remove(id) {
            Some(session) => {
                tracing::info!(
                    session = id,
                    commands = session.commands_executed(),
                    progress = session.progress(),
                    "session closed"
                );
                true
            }
            None => false,
        }
    }

    pub fn feed(&mut self, id: &str, raw: &str) -> registry::Result<DispatchResult> {
        let session = self.registry.try_get_mut(id)?;
        let generation = session.generation();
        let result = session.feed(raw);
        self.run_effects(generation, &result);
        Ok(result)
    }

    pub fn feed_bytes(&mut self, id: &str, raw: &[u8]) -> registry::Result<DispatchResult> {
        let session = self.registry.try_get_mut(id)?;
        let generation = session.generation();
        let result = session.feed_bytes(raw);
        self.run_effects(generation, &result);
        Ok(result)
    }

    /// Applies every result that has already arrived, without waiting.
    pub fn drain_completions(&mut self) -> Vec<SessionOutput> {
        let mut outputs = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(msg) => outputs.extend(self.apply(msg)),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        outputs
    }

    /// Waits for the next result addressed to a session that is still open.
    pub async fn next_completion(&mut self) -> Option<SessionOutput> {
        loop {
            let msg = self.rx.recv().await?;
            if let Some(output) = self.apply(msg) {
                return Some(output);
            }
        }
    }

    fn apply(&mut self, msg: HostMessage) -> Option<SessionOutput> {
        match msg {
            HostMessage::CommandFinished {
                session_id,
                generation,
                submission_id,
                outcome,
            } => {
                let session = match self.registry.get_mut(&session_id) {
                    Some(session) if session.generation() == generation => session,
                    _ => {
                        tracing::debug!(session = %session_id, generation, submission = submission_id, "result for closed session dropped");
                        return None;
                    }
                };
                let result = session.dispatch(Action::CommandFinished {
                    submission_id,
                    outcome,
                });
                self.run_effects(generation, &result);
                Some(SessionOutput { session_id, result })
            }
        }
    }

    fn run_effects(&self, generation: u64, result: &DispatchResult) {
        for effect in &result.effects {
            match effect {
                Effect::ExecuteCommand {
                    submission_id,
                    request,
                } => self.spawn_execute(generation, *submission_id, request.clone()),
                Effect::ProgressChanged {
                    session_id,
                    progress,
                } => {
                    tracing::debug!(session = %session_id, progress, "progress reported");
                }
            }
        }
    }

    fn spawn_execute(&self, generation: u64, submission_id: u64, request: CommandRequest) {
        let bus = self.bus.clone();
        let session_id = request.session_id.clone();
        let task = self.executor.execute(request);
        self.runtime.spawn(async move {
            let outcome = task.await;
            let _ = bus.send(HostMessage::CommandFinished {
                session_id,
                generation,
                submission_id,
                outcome,
            });
        });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/host.rs"]
mod tests;
