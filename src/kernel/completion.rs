use crate::kernel::services::ports::{CompletionSettings, DEFAULT_MAX_CANDIDATES};

/// Known command lines offered on Tab, in the order they are offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCatalog {
    entries: Vec<String>,
    entries_lc: Vec<String>,
    max_candidates: usize,
}

impl Default for CommandCatalog {
    fn default() -> Self {
        Self::from_settings(&CompletionSettings::default())
    }
}

impl CommandCatalog {
    pub fn new<I, S>(entries: I, max_candidates: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries
            .into_iter()
            .map(Into::into)
            .filter(|e: &String| !e.trim().is_empty())
            .collect();
        let entries_lc = entries.iter().map(|e| e.to_lowercase()).collect();
        Self {
            entries,
            entries_lc,
            max_candidates: if max_candidates == 0 {
                DEFAULT_MAX_CANDIDATES
            } else {
                max_candidates
            },
        }
    }

    pub fn from_settings(settings: &CompletionSettings) -> Self {
        Self::new(settings.catalog.iter().cloned(), settings.max_candidates)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    /// Case-insensitive substring match in catalog order. A blank input
    /// offers the head of the catalog.
    pub fn candidates(&self, input: &str) -> Vec<String> {
        let needle = input.to_lowercase();
        let blank = needle.trim().is_empty();
        self.entries
            .iter()
            .zip(&self.entries_lc)
            .filter(|(_, lc)| blank || lc.contains(&needle))
            .map(|(entry, _)| entry.clone())
            .take(self.max_candidates)
            .collect()
    }
}

/// Tab cycling over a fixed candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionState {
    candidates: Vec<String>,
    index: usize,
}

impl CompletionState {
    pub fn start(candidates: Vec<String>) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        Some(Self {
            candidates,
            index: 0,
        })
    }

    pub fn current(&self) -> &str {
        &self.candidates[self.index]
    }

    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.candidates.len();
        self.current()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/completion.rs"]
mod tests;
