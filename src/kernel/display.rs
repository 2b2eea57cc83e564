//! Display edits emitted by a session.
//!
//! Counts are in characters. `EraseBackward(n)` moves the cursor `n` cells
//! left and clears everything from there to the end of the line; the session
//! only issues it with the cursor at the end of what is on screen.
//!
//! Cursor moves stay on one terminal row, so a line longer than the terminal
//! width is not redrawn cleanly once it soft-wraps.

use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOp {
    Write(String),
    EraseBackward(usize),
    MoveLeft(usize),
    MoveRight(usize),
    ClearScreen,
}

/// Collects ops, dropping no-ops and merging adjacent writes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DisplayBatch {
    ops: Vec<DisplayOp>,
}

impl DisplayBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            return;
        }
        if let Some(DisplayOp::Write(prev)) = self.ops.last_mut() {
            prev.push_str(text);
            return;
        }
        self.ops.push(DisplayOp::Write(text.to_string()));
    }

    pub fn erase_backward(&mut self, n: usize) {
        if n > 0 {
            self.ops.push(DisplayOp::EraseBackward(n));
        }
    }

    pub fn move_left(&mut self, n: usize) {
        if n > 0 {
            self.ops.push(DisplayOp::MoveLeft(n));
        }
    }

    pub fn move_right(&mut self, n: usize) {
        if n > 0 {
            self.ops.push(DisplayOp::MoveRight(n));
        }
    }

    pub fn clear_screen(&mut self) {
        self.ops.push(DisplayOp::ClearScreen);
    }

    pub fn ops(&self) -> &[DisplayOp] {
        &self.ops
    }
}

/// Renders ops for a VT100-compatible terminal.
pub fn encode_ansi(ops: &[DisplayOp]) -> String {
    let mut out = String::new();
    for op in ops {
        match op {
            DisplayOp::Write(text) => out.push_str(text),
            DisplayOp::EraseBackward(n) => {
                let _ = write!(out, "\x1b[{n}D\x1b[K");
            }
            DisplayOp::MoveLeft(n) => {
                let _ = write!(out, "\x1b[{n}D");
            }
            DisplayOp::MoveRight(n) => {
                let _ = write!(out, "\x1b[{n}C");
            }
            DisplayOp::ClearScreen => out.push_str("\x1b[2J\x1b[3J\x1b[H"),
        }
    }
    out
}

/// A single-column-per-char model of the terminal, enough to check that the
/// edit stream leaves the screen showing what the session thinks it shows.
#[derive(Debug, Default, Clone)]
pub struct VirtualScreen {
    scrollback: Vec<String>,
    line: Vec<char>,
    col: usize,
    clears: usize,
}

impl VirtualScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, ops: &[DisplayOp]) {
        for op in ops {
            match op {
                DisplayOp::Write(text) => self.write(text),
                DisplayOp::EraseBackward(n) => {
                    self.col = self.col.saturating_sub(*n);
                    self.line.truncate(self.col);
                }
                DisplayOp::MoveLeft(n) => self.col = self.col.saturating_sub(*n),
                DisplayOp::MoveRight(n) => self.col = (self.col + n).min(self.line.len()),
                DisplayOp::ClearScreen => {
                    self.scrollback.clear();
                    self.line.clear();
                    self.col = 0;
                    self.clears += 1;
                }
            }
        }
    }

    fn write(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\r' => self.col = 0,
                '\n' => {
                    let line: String = self.line.drain(..).collect();
                    self.scrollback.push(line);
                    self.col = 0;
                }
                '\u{1b}' => {
                    // Output may carry colour codes; they take no cells.
                    if chars.peek() == Some(&'[') {
                        chars.next();
                        for c in chars.by_ref() {
                            if ('\u{40}'..='\u{7e}').contains(&c) {
                                break;
                            }
                        }
                    }
                }
                c => {
                    if self.col < self.line.len() {
                        self.line[self.col] = c;
                    } else {
                        while self.line.len() < self.col {
                            self.line.push(' ');
                        }
                        self.line.push(c);
                    }
                    self.col += 1;
                }
            }
        }
    }

    pub fn current_line(&self) -> String {
        self.line.iter().collect()
    }

    pub fn cursor_col(&self) -> usize {
        self.col
    }

    pub fn scrollback(&self) -> &[String] {
        &self.scrollback
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Every line, committed ones first, ending with the current line.
    pub fn transcript(&self) -> Vec<String> {
        let mut lines = self.scrollback.clone();
        lines.push(self.current_line());
        lines
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/display.rs"]
mod tests;
