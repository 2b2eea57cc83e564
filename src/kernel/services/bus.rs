use tokio::sync::mpsc::{self, error::SendError, error::TryRecvError};

use crate::kernel::services::ports::{ExecOutcome, SessionId};

#[derive(Debug)]
pub enum HostMessage {
    CommandFinished {
        session_id: SessionId,
        generation: u64,
        submission_id: u64,
        outcome: ExecOutcome,
    },
}

#[derive(Debug, Clone)]
pub struct HostBusSender {
    tx: mpsc::UnboundedSender<HostMessage>,
}

#[derive(Debug)]
pub struct HostBusReceiver {
    rx: mpsc::UnboundedReceiver<HostMessage>,
}

pub fn host_bus() -> (HostBusSender, HostBusReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (HostBusSender { tx }, HostBusReceiver { rx })
}

impl HostBusSender {
    pub fn send(&self, msg: HostMessage) -> Result<(), SendError<HostMessage>> {
        self.tx.send(msg)
    }
}

impl HostBusReceiver {
    pub fn try_recv(&mut self) -> Result<HostMessage, TryRecvError> {
        self.rx.try_recv()
    }

    pub async fn recv(&mut self) -> Option<HostMessage> {
        self.rx.recv().await
    }
}
