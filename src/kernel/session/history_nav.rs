use crate::models::entry_from_newest;

use super::{DispatchResult, TerminalSession};

impl TerminalSession {
    pub(super) fn history_prev(&mut self, out: &mut DispatchResult) {
        let entries = self.history.load(&self.id);
        if entries.is_empty() {
            return;
        }
        let oldest = entries.len() - 1;

        let next = match self.history_index {
            None => {
                self.saved_draft = self.buffer.clone();
                0
            }
            // The store may have shrunk under us (capacity, clear).
            Some(idx) if idx >= oldest => {
                if idx == oldest {
                    return;
                }
                oldest
            }
            Some(idx) => idx + 1,
        };

        let Some(entry) = entry_from_newest(&entries, next) else {
            return;
        };
        self.history_index = Some(next);
        self.replace_buffer(entry.chars().collect(), out);
    }

    pub(super) fn history_next(&mut self, out: &mut DispatchResult) {
        let Some(idx) = self.history_index else {
            return;
        };

        if idx == 0 {
            self.history_index = None;
            let draft = std::mem::take(&mut self.saved_draft);
            self.replace_buffer(draft, out);
            return;
        }

        let entries = self.history.load(&self.id);
        let next = (idx - 1).min(entries.len().saturating_sub(1));
        match entry_from_newest(&entries, next) {
            Some(entry) => {
                self.history_index = Some(next);
                self.replace_buffer(entry.chars().collect(), out);
            }
            None => {
                self.history_index = None;
                let draft = std::mem::take(&mut self.saved_draft);
                self.replace_buffer(draft, out);
            }
        }
    }
}
