//! Open sessions keyed by id. Owned by whoever drives the sessions; there is
//! no process-wide map.

use std::collections::HashMap;

use crate::kernel::services::ports::SessionId;
use crate::kernel::session::TerminalSession;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    AlreadyOpen(SessionId),
    NotFound(SessionId),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::AlreadyOpen(id) => write!(f, "Session already open: {}", id),
            RegistryError::NotFound(id) => write!(f, "Session not found: {}", id),
        }
    }
}

impl std::error::Error for RegistryError {}

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, TerminalSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, session: TerminalSession) -> Result<&mut TerminalSession> {
        let id = session.id().to_string();
        if self.sessions.contains_key(&id) {
            return Err(RegistryError::AlreadyOpen(id));
        }
        Ok(self.sessions.entry(id).or_insert(session))
    }

    pub fn get(&self, id: &str) -> Option<&TerminalSession> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut TerminalSession> {
        self.sessions.get_mut(id)
    }

    pub fn try_get_mut(&mut self, id: &str) -> Result<&mut TerminalSession> {
        self.sessions
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    pub fn remove(&mut self, id: &str) -> Option<TerminalSession> {
        self.sessions.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    /// Sorted, so callers get a stable order.
    pub fn ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = self.sessions.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/registry.rs"]
mod tests;
