//! Cursor movement and in-line edits.
//!
//! The screen always shows `prompt + buffer` with the terminal cursor at
//! `prompt.len() + cursor`. Every edit below emits just enough ops to restore
//! that after mutating the buffer.

use super::{DispatchResult, TerminalSession};

const DELETE_HINT: &str = "Nothing to delete. Type 'help' for available commands.";

impl TerminalSession {
    pub(super) fn insert(&mut self, ch: char, out: &mut DispatchResult) {
        self.buffer.insert(self.cursor, ch);
        let tail: String = self.buffer[self.cursor..].iter().collect();
        self.cursor += 1;
        out.display.write(tail);
        out.display.move_left(self.buffer.len() - self.cursor);
    }

    pub(super) fn backspace(&mut self, out: &mut DispatchResult) {
        if self.cursor == 0 {
            return;
        }
        let old_len = self.buffer.len();
        let old_cursor = self.cursor;
        self.cursor -= 1;
        self.buffer.remove(self.cursor);
        self.rewrite_from(self.cursor, old_len, old_cursor, out);
    }

    pub(super) fn delete_forward(&mut self, out: &mut DispatchResult) {
        if self.buffer.is_empty() {
            out.display.write("\r\n");
            out.display.write(DELETE_HINT);
            out.display.write("\r\n");
            out.display.write(&self.config.prompt);
            return;
        }
        if self.cursor == self.buffer.len() {
            return;
        }
        let old_len = self.buffer.len();
        self.buffer.remove(self.cursor);
        self.rewrite_from(self.cursor, old_len, self.cursor, out);
    }

    pub(super) fn move_home(&mut self, out: &mut DispatchResult) {
        out.display.move_left(self.cursor);
        self.cursor = 0;
    }

    pub(super) fn move_end(&mut self, out: &mut DispatchResult) {
        out.display.move_right(self.buffer.len() - self.cursor);
        self.cursor = self.buffer.len();
    }

    pub(super) fn cursor_left(&mut self, out: &mut DispatchResult) {
        if self.cursor > 0 {
            self.cursor -= 1;
            out.display.move_left(1);
        }
    }

    pub(super) fn cursor_right(&mut self, out: &mut DispatchResult) {
        if self.cursor < self.buffer.len() {
            self.cursor += 1;
            out.display.move_right(1);
        }
    }

    pub(super) fn kill_to_end(&mut self, out: &mut DispatchResult) {
        let old_len = self.buffer.len();
        if self.cursor == old_len {
            return;
        }
        self.buffer.truncate(self.cursor);
        self.rewrite_from(self.cursor, old_len, self.cursor, out);
    }

    pub(super) fn kill_line(&mut self, out: &mut DispatchResult) {
        if self.buffer.is_empty() {
            return;
        }
        self.replace_buffer(Vec::new(), out);
    }

    /// Swaps in a whole new line with the cursor at its end. The erase covers
    /// exactly the old line, whose length is captured before mutating.
    pub(super) fn replace_buffer(&mut self, next: Vec<char>, out: &mut DispatchResult) {
        let old_len = self.buffer.len();
        let old_cursor = self.cursor;
        self.buffer = next;
        self.cursor = self.buffer.len();
        self.rewrite_from(0, old_len, old_cursor, out);
    }

    /// Redraws `buffer[from..]` over a screen that still shows the old line
    /// (`old_len` chars, cursor at `old_cursor`), then parks the cursor.
    fn rewrite_from(
        &self,
        from: usize,
        old_len: usize,
        old_cursor: usize,
        out: &mut DispatchResult,
    ) {
        out.display.move_right(old_len - old_cursor);
        out.display.erase_backward(old_len - from);
        let tail: String = self.buffer[from..].iter().collect();
        out.display.write(tail);
        out.display.move_left(self.buffer.len() - self.cursor);
    }
}
