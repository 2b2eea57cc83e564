//! Line-editing terminal session.
//!
//! A session owns the unsubmitted command line and its cursor, plus the
//! history-browsing, completion and reverse-search state. Raw input is
//! classified by [`InputParser`] and each event is handled to completion
//! before the next. Handlers emit [`DisplayOp`]s for the renderer and
//! [`Effect`]s for the host (command execution, progress updates).

mod edit;
mod history_nav;
mod search;
mod submit;

use std::sync::Arc;
use std::time::Instant;

use crate::kernel::completion::{CommandCatalog, CompletionState};
use crate::kernel::display::{DisplayBatch, DisplayOp};
use crate::kernel::input::{InputEvent, InputParser};
use crate::kernel::progress::ProgressTarget;
use crate::kernel::services::ports::{HistoryStore, SessionId, Settings, DEFAULT_PROMPT};
use crate::kernel::{Action, Effect};

pub use search::ReverseSearchState;

/// Session-independent presentation and matching rules.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub prompt: String,
    pub banner: Vec<String>,
    pub catalog: CommandCatalog,
    pub progress_target: ProgressTarget,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: Vec::new(),
            catalog: CommandCatalog::default(),
            progress_target: ProgressTarget::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            prompt: settings.prompt.clone(),
            banner: settings.banner.clone(),
            catalog: CommandCatalog::from_settings(&settings.completion),
            progress_target: ProgressTarget::from_settings(&settings.progress),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMode {
    Normal,
    ReverseSearch(ReverseSearchState),
    Completion(CompletionState),
}

#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub id: u64,
    pub command: String,
    pub started_at: Instant,
}

#[derive(Debug, Default)]
pub struct DispatchResult {
    pub display: DisplayBatch,
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    pub fn display_ops(&self) -> &[DisplayOp] {
        self.display.ops()
    }
}

pub struct TerminalSession {
    id: SessionId,
    /// Distinguishes reopened views that share an id.
    generation: u64,
    config: Arc<SessionConfig>,
    history: Arc<dyn HistoryStore>,
    parser: InputParser,
    buffer: Vec<char>,
    cursor: usize,
    /// Steps back from the newest history entry while browsing.
    history_index: Option<usize>,
    saved_draft: Vec<char>,
    mode: SessionMode,
    pending: Option<PendingSubmission>,
    last_submission_id: u64,
    progress: u8,
    commands_executed: u64,
}

impl std::fmt::Debug for TerminalSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSession")
            .field("id", &self.id)
            .field("generation", &self.generation)
            .field("history", &self.history.name())
            .field("buffer", &self.line())
            .field("cursor", &self.cursor)
            .field("history_index", &self.history_index)
            .field("mode", &self.mode)
            .field("pending", &self.pending)
            .field("progress", &self.progress)
            .finish()
    }
}

impl TerminalSession {
    pub fn new(
        id: impl Into<SessionId>,
        config: Arc<SessionConfig>,
        history: Arc<dyn HistoryStore>,
    ) -> Self {
        Self {
            id: id.into(),
            generation: 0,
            config,
            history,
            parser: InputParser::new(),
            buffer: Vec::new(),
            cursor: 0,
            history_index: None,
            saved_draft: Vec::new(),
            mode: SessionMode::Normal,
            pending: None,
            last_submission_id: 0,
            progress: 0,
            commands_executed: 0,
        }
    }

    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn line(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn history_index(&self) -> Option<usize> {
        self.history_index
    }

    pub fn saved_draft(&self) -> String {
        self.saved_draft.iter().collect()
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    pub fn is_processing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingSubmission> {
        self.pending.as_ref()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn commands_executed(&self) -> u64 {
        self.commands_executed
    }

    pub fn prompt(&self) -> &str {
        &self.config.prompt
    }

    /// Banner and first prompt for a freshly opened view.
    pub fn open(&mut self) -> DispatchResult {
        let mut out = DispatchResult::default();
        for line in &self.config.banner {
            out.display.write(line);
            out.display.write("\r\n");
        }
        out.display.write(&self.config.prompt);
        tracing::info!(session = %self.id, history = self.history.name(), "session opened");
        out
    }

    pub fn feed(&mut self, raw: &str) -> DispatchResult {
        let events = self.parser.feed(raw);
        self.dispatch_events(events)
    }

    pub fn feed_bytes(&mut self, raw: &[u8]) -> DispatchResult {
        let events = self.parser.feed_bytes(raw);
        self.dispatch_events(events)
    }

    fn dispatch_events(&mut self, events: Vec<InputEvent>) -> DispatchResult {
        let mut out = DispatchResult::default();
        for event in events {
            self.handle_input(event, &mut out);
        }
        out
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let mut out = DispatchResult::default();
        match action {
            Action::Input(event) => self.handle_input(event, &mut out),
            Action::CommandFinished {
                submission_id,
                outcome,
            } => self.finish_command(submission_id, outcome, &mut out),
        }
        out
    }

    fn handle_input(&mut self, event: InputEvent, out: &mut DispatchResult) {
        if self.pending.is_some() {
            if event == InputEvent::Interrupt {
                self.interrupt(out);
            } else {
                tracing::debug!(session = %self.id, ?event, "input ignored while command runs");
            }
            return;
        }

        match std::mem::replace(&mut self.mode, SessionMode::Normal) {
            SessionMode::Normal => self.handle_normal(event, out),
            SessionMode::ReverseSearch(state) => self.handle_search(state, event, out),
            SessionMode::Completion(state) => {
                if event == InputEvent::Complete {
                    self.cycle_completion(state, out);
                } else {
                    self.handle_normal(event, out);
                }
            }
        }
    }

    fn handle_normal(&mut self, event: InputEvent, out: &mut DispatchResult) {
        match event {
            InputEvent::Submit => self.submit(out),
            InputEvent::Complete => self.start_completion(out),
            InputEvent::Interrupt => self.interrupt(out),
            InputEvent::ClearScreen => self.clear_screen(out),
            InputEvent::DeleteForward => self.delete_forward(out),
            InputEvent::ReverseSearch => self.start_reverse_search(out),
            InputEvent::MoveHome => self.move_home(out),
            InputEvent::MoveEnd => self.move_end(out),
            InputEvent::KillToEnd => self.kill_to_end(out),
            InputEvent::KillLine => self.kill_line(out),
            InputEvent::HistoryPrev => self.history_prev(out),
            InputEvent::HistoryNext => self.history_next(out),
            InputEvent::CursorRight => self.cursor_right(out),
            InputEvent::CursorLeft => self.cursor_left(out),
            InputEvent::Backspace => self.backspace(out),
            InputEvent::Insert(ch) => self.insert(ch, out),
        }
    }

    fn start_completion(&mut self, out: &mut DispatchResult) {
        let candidates = self.config.catalog.candidates(&self.line());
        let Some(state) = CompletionState::start(candidates) else {
            return;
        };
        self.replace_buffer(state.current().chars().collect(), out);
        self.mode = SessionMode::Completion(state);
    }

    fn cycle_completion(&mut self, mut state: CompletionState, out: &mut DispatchResult) {
        let next: Vec<char> = state.advance().chars().collect();
        self.replace_buffer(next, out);
        self.mode = SessionMode::Completion(state);
    }

    /// Drops the line and any sub-mode. Works even while a command runs; the
    /// late response is discarded when it arrives.
    fn interrupt(&mut self, out: &mut DispatchResult) {
        if let Some(pending) = self.pending.take() {
            tracing::info!(
                session = %self.id,
                submission = pending.id,
                command = %pending.command,
                "command interrupted"
            );
        }
        out.display.move_right(self.buffer.len() - self.cursor);
        self.reset_line();
        out.display.write("^C\r\n");
        out.display.write(&self.config.prompt);
    }

    fn clear_screen(&mut self, out: &mut DispatchResult) {
        self.reset_line();
        out.display.clear_screen();
        out.display.write(&self.config.prompt);
    }

    fn reset_line(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.history_index = None;
        self.saved_draft.clear();
        self.mode = SessionMode::Normal;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
