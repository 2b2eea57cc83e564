//! Ctrl+R incremental history search.
//!
//! The search line is drawn on its own row below the abandoned prompt and is
//! redrawn whole on every change.

use crate::kernel::input::InputEvent;
use crate::models::find_recent;

use super::{DispatchResult, SessionMode, TerminalSession};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseSearchState {
    query: String,
    /// Distinct matches to pass over, newest first.
    skip: usize,
    rendered_len: usize,
}

impl ReverseSearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn skip(&self) -> usize {
        self.skip
    }
}

impl TerminalSession {
    pub(super) fn start_reverse_search(&mut self, out: &mut DispatchResult) {
        out.display.move_right(self.buffer.len() - self.cursor);
        out.display.write("\r\n");
        self.buffer.clear();
        self.cursor = 0;
        self.history_index = None;
        self.saved_draft.clear();

        let mut state = ReverseSearchState::default();
        self.render_search(&mut state, out);
        self.mode = SessionMode::ReverseSearch(state);
    }

    pub(super) fn handle_search(
        &mut self,
        mut state: ReverseSearchState,
        event: InputEvent,
        out: &mut DispatchResult,
    ) {
        match event {
            InputEvent::Insert(ch) => {
                state.query.push(ch);
                state.skip = 0;
                self.render_search(&mut state, out);
            }
            InputEvent::Backspace => {
                if state.query.pop().is_some() {
                    state.skip = 0;
                    self.render_search(&mut state, out);
                }
            }
            InputEvent::ReverseSearch => {
                if self.search_match(&state.query, state.skip + 1).is_some() {
                    state.skip += 1;
                    self.render_search(&mut state, out);
                }
            }
            InputEvent::Submit => {
                self.accept_search(state, out);
                return;
            }
            InputEvent::Interrupt => {
                self.interrupt(out);
                return;
            }
            other => {
                tracing::trace!(session = %self.id, event = ?other, "ignored during reverse search");
            }
        }
        self.mode = SessionMode::ReverseSearch(state);
    }

    fn accept_search(&mut self, state: ReverseSearchState, out: &mut DispatchResult) {
        match self.search_match(&state.query, state.skip) {
            Some(found) => {
                out.display.erase_backward(state.rendered_len);
                out.display.write(&self.config.prompt);
                out.display.write(&found);
                self.buffer = found.chars().collect();
                self.cursor = self.buffer.len();
            }
            None => {
                out.display.write("\r\nno match for `");
                out.display.write(&state.query);
                out.display.write("'\r\n");
                out.display.write(&self.config.prompt);
                self.buffer.clear();
                self.cursor = 0;
            }
        }
        self.mode = SessionMode::Normal;
    }

    /// An empty query matches nothing.
    fn search_match(&self, query: &str, skip: usize) -> Option<String> {
        if query.is_empty() {
            return None;
        }
        let entries = self.history.load(&self.id);
        find_recent(&entries, query, skip).map(str::to_string)
    }

    fn render_search(&self, state: &mut ReverseSearchState, out: &mut DispatchResult) {
        let preview = self
            .search_match(&state.query, state.skip)
            .unwrap_or_default();
        let line = format!("(reverse-i-search)`{}': {}", state.query, preview);
        out.display.erase_backward(state.rendered_len);
        out.display.write(&line);
        state.rendered_len = line.chars().count();
    }
}
