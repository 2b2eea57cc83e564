//! Bounded command log.
//!
//! Entries are kept oldest first. Blank commands are never stored and a
//! command equal to the newest entry is not appended twice in a row. Once the
//! log grows past its capacity the oldest entries are dropped.

use std::collections::VecDeque;

pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl CommandHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Rebuilds a log from persisted entries, re-applying the blank/duplicate
    /// and capacity rules so a hand-edited file cannot break them.
    pub fn from_entries<I, S>(capacity: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut history = Self::new(capacity);
        for entry in entries {
            history.push(entry.as_ref());
        }
        history
    }

    /// Returns `true` when the command was appended.
    pub fn push(&mut self, command: &str) -> bool {
        let command = command.trim();
        if command.is_empty() {
            return false;
        }
        if self.entries.back().is_some_and(|last| last == command) {
            return false;
        }

        self.entries.push_back(command.to_string());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

/// Entry `back` steps behind the newest one (`0` is the newest).
pub fn entry_from_newest(entries: &[String], back: usize) -> Option<&str> {
    let idx = entries.len().checked_sub(back.checked_add(1)?)?;
    entries.get(idx).map(String::as_str)
}

/// Finds the `skip`-th distinct entry containing `query`, newest first.
pub fn find_recent<'a>(entries: &'a [String], query: &str, skip: usize) -> Option<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for entry in entries.iter().rev() {
        if !entry.contains(query) || seen.contains(&entry.as_str()) {
            continue;
        }
        if seen.len() == skip {
            return Some(entry.as_str());
        }
        seen.push(entry.as_str());
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/models/command_history.rs"]
mod tests;
