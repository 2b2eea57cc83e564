//! `HistoryStore` adapters.
//!
//! `MemoryHistoryStore` keeps everything in process. `FileHistoryStore` writes
//! each session's log to `<dir>/<session>.json` and serves reads from a
//! write-through mirror; when the disk misbehaves it logs and carries on in
//! memory.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::kernel::services::ports::{HistoryError, HistoryStore};
use crate::models::{CommandHistory, DEFAULT_HISTORY_CAPACITY};

type Logs = HashMap<String, CommandHistory>;

fn lock(logs: &Mutex<Logs>) -> MutexGuard<'_, Logs> {
    // A panic while holding the lock cannot leave a log half-updated.
    logs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug)]
pub struct MemoryHistoryStore {
    capacity: usize,
    logs: Mutex<Logs>,
}

impl Default for MemoryHistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl MemoryHistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            logs: Mutex::new(HashMap::new()),
        }
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&self, session_id: &str, command: &str) {
        lock(&self.logs)
            .entry(session_id.to_string())
            .or_insert_with(|| CommandHistory::new(self.capacity))
            .push(command);
    }

    fn load(&self, session_id: &str) -> Vec<String> {
        lock(&self.logs)
            .get(session_id)
            .map(CommandHistory::to_vec)
            .unwrap_or_default()
    }

    fn clear(&self, session_id: &str) {
        if let Some(log) = lock(&self.logs).get_mut(session_id) {
            log.clear();
        }
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct HistoryFile {
    session_id: String,
    #[serde(default)]
    entries: Vec<String>,
}

#[derive(Debug)]
pub struct FileHistoryStore {
    dir: PathBuf,
    capacity: usize,
    logs: Mutex<Logs>,
}

impl FileHistoryStore {
    pub fn new(dir: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            dir: dir.into(),
            capacity,
            logs: Mutex::new(HashMap::new()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, session_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(session_id)))
    }

    /// Reads the session's file the first time it is touched.
    fn ensure_loaded<'a>(&self, logs: &'a mut Logs, session_id: &str) -> &'a mut CommandHistory {
        logs.entry(session_id.to_string()).or_insert_with(|| {
            let path = self.path_for(session_id);
            match read_entries(&path) {
                Ok(entries) => CommandHistory::from_entries(self.capacity, entries),
                Err(err) => {
                    tracing::warn!(session = session_id, path = %path.display(), error = %err, "history unreadable, starting empty");
                    CommandHistory::new(self.capacity)
                }
            }
        })
    }
}

impl HistoryStore for FileHistoryStore {
    fn append(&self, session_id: &str, command: &str) {
        let mut logs = lock(&self.logs);
        let log = self.ensure_loaded(&mut logs, session_id);
        if !log.push(command) {
            return;
        }
        let path = self.path_for(session_id);
        if let Err(err) = write_entries(&path, session_id, log) {
            tracing::warn!(session = session_id, path = %path.display(), error = %err, "history not persisted");
        }
    }

    fn load(&self, session_id: &str) -> Vec<String> {
        let mut logs = lock(&self.logs);
        self.ensure_loaded(&mut logs, session_id).to_vec()
    }

    fn clear(&self, session_id: &str) {
        let mut logs = lock(&self.logs);
        logs.insert(session_id.to_string(), CommandHistory::new(self.capacity));
        let path = self.path_for(session_id);
        match std::fs::remove_file(&path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(session = session_id, path = %path.display(), error = %err, "history file not removed");
            }
        }
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

fn read_entries(path: &Path) -> Result<Vec<String>, HistoryError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };
    let file: HistoryFile = serde_json::from_str(&data)?;
    Ok(file.entries)
}

fn write_entries(path: &Path, session_id: &str, log: &CommandHistory) -> Result<(), HistoryError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = HistoryFile {
        session_id: session_id.to_string(),
        entries: log.to_vec(),
    };
    let content = serde_json::to_string_pretty(&file)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Session ids are opaque; anything outside `[A-Za-z0-9_-]` is replaced and a
/// hash of the raw id keeps distinct ids apart.
fn file_stem(session_id: &str) -> String {
    let clean: String = session_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if !clean.is_empty() && clean == session_id {
        return clean;
    }
    let mut hasher = DefaultHasher::new();
    session_id.hash(&mut hasher);
    format!("{}-{:016x}", clean, hasher.finish())
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/history.rs"]
mod tests;
