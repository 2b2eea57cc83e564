use std::io;

/// Per-session command log keyed by session id.
///
/// Calls never fail from the caller's point of view: an adapter that cannot
/// reach its backing storage logs the problem and keeps serving from memory.
pub trait HistoryStore: Send + Sync {
    /// No-op for blank commands or a repeat of the newest entry.
    fn append(&self, session_id: &str, command: &str);

    /// Entries oldest first; empty for an unknown session.
    fn load(&self, session_id: &str) -> Vec<String>;

    fn clear(&self, session_id: &str);

    fn name(&self) -> &'static str;
}

#[derive(Debug)]
pub enum HistoryError {
    Io(io::Error),
    Serde(serde_json::Error),
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "history IO error: {}", e),
            HistoryError::Serde(e) => write!(f, "history format error: {}", e),
        }
    }
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryError::Io(e) => Some(e),
            HistoryError::Serde(e) => Some(e),
        }
    }
}

impl From<io::Error> for HistoryError {
    fn from(e: io::Error) -> Self {
        HistoryError::Io(e)
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(e: serde_json::Error) -> Self {
        HistoryError::Serde(e)
    }
}
