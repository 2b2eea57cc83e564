//! Raw terminal input → line-editing events.
//!
//! Input arrives as single keystrokes or as pasted bursts, and escape
//! sequences may be split across chunks, so the parser keeps a little state
//! between `feed` calls. Anything it cannot classify produces no event.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Submit,
    Complete,
    Interrupt,
    ClearScreen,
    DeleteForward,
    ReverseSearch,
    MoveHome,
    MoveEnd,
    KillToEnd,
    KillLine,
    HistoryPrev,
    HistoryNext,
    CursorRight,
    CursorLeft,
    Backspace,
    Insert(char),
}

const ESC: char = '\u{1b}';
const MAX_CSI_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseState {
    Ground,
    Escape,
    Csi(String),
    Ss3,
}

#[derive(Debug)]
pub struct InputParser {
    state: ParseState,
    /// The last event was a `\r`; a directly following `\n` belongs to it.
    after_cr: bool,
    utf8_tail: Vec<u8>,
}

impl Default for InputParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InputParser {
    pub fn new() -> Self {
        Self {
            state: ParseState::Ground,
            after_cr: false,
            utf8_tail: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        self.state = ParseState::Ground;
        self.after_cr = false;
        self.utf8_tail.clear();
    }

    /// True while an escape sequence is only partially received.
    pub fn is_mid_sequence(&self) -> bool {
        self.state != ParseState::Ground
    }

    pub fn feed(&mut self, chunk: &str) -> Vec<InputEvent> {
        let mut out = Vec::new();
        for ch in chunk.chars() {
            self.step(ch, &mut out);
        }
        out
    }

    /// Byte-oriented entry point; a UTF-8 sequence cut at the end of `bytes`
    /// is held back until the rest arrives.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Vec<InputEvent> {
        let mut buf = std::mem::take(&mut self.utf8_tail);
        buf.extend_from_slice(bytes);

        let mut out = Vec::new();
        let mut rest: &[u8] = &buf;
        loop {
            match std::str::from_utf8(rest) {
                Ok(text) => {
                    for ch in text.chars() {
                        self.step(ch, &mut out);
                    }
                    break;
                }
                Err(err) => {
                    let valid = err.valid_up_to();
                    // `valid_up_to` guarantees this prefix decodes.
                    let text = std::str::from_utf8(&rest[..valid]).unwrap_or_default();
                    for ch in text.chars() {
                        self.step(ch, &mut out);
                    }
                    match err.error_len() {
                        Some(bad) => {
                            tracing::debug!(bytes = bad, "dropping invalid utf-8 input");
                            rest = &rest[valid + bad..];
                        }
                        None => {
                            self.utf8_tail = rest[valid..].to_vec();
                            break;
                        }
                    }
                }
            }
        }
        out
    }

    fn step(&mut self, ch: char, out: &mut Vec<InputEvent>) {
        let after_cr = std::mem::replace(&mut self.after_cr, false);

        match std::mem::replace(&mut self.state, ParseState::Ground) {
            ParseState::Ground => self.ground(ch, after_cr, out),
            ParseState::Escape => match ch {
                '[' => self.state = ParseState::Csi(String::new()),
                'O' => self.state = ParseState::Ss3,
                ESC => self.state = ParseState::Escape,
                c if is_c0_or_del(c) => self.ground(c, false, out),
                _ => {
                    tracing::trace!(?ch, "ignoring alt-modified key");
                }
            },
            ParseState::Csi(mut params) => {
                if ('\u{20}'..='\u{3f}').contains(&ch) {
                    if params.len() >= MAX_CSI_LEN {
                        tracing::debug!("abandoning oversized escape sequence");
                        return;
                    }
                    params.push(ch);
                    self.state = ParseState::Csi(params);
                } else if ('\u{40}'..='\u{7e}').contains(&ch) {
                    match classify_csi(&params, ch) {
                        Some(event) => out.push(event),
                        None => tracing::trace!(%params, final_byte = ?ch, "ignoring escape sequence"),
                    }
                } else {
                    // Malformed sequence; the byte starts fresh input.
                    self.ground(ch, false, out);
                }
            }
            ParseState::Ss3 if is_c0_or_del(ch) => self.ground(ch, false, out),
            ParseState::Ss3 => match classify_ss3(ch) {
                Some(event) => out.push(event),
                None => tracing::trace!(final_byte = ?ch, "ignoring ss3 sequence"),
            },
        }
    }

    fn ground(&mut self, ch: char, after_cr: bool, out: &mut Vec<InputEvent>) {
        let event = match ch {
            '\r' => {
                self.after_cr = true;
                InputEvent::Submit
            }
            '\n' if after_cr => return,
            '\n' => InputEvent::Submit,
            '\t' => InputEvent::Complete,
            '\u{03}' => InputEvent::Interrupt,
            '\u{0c}' => InputEvent::ClearScreen,
            '\u{04}' => InputEvent::DeleteForward,
            '\u{12}' => InputEvent::ReverseSearch,
            '\u{01}' => InputEvent::MoveHome,
            '\u{05}' => InputEvent::MoveEnd,
            '\u{0b}' => InputEvent::KillToEnd,
            '\u{15}' => InputEvent::KillLine,
            '\u{7f}' | '\u{08}' => InputEvent::Backspace,
            ESC => {
                self.state = ParseState::Escape;
                return;
            }
            c if c.is_control() => {
                tracing::trace!(code = c as u32, "ignoring control character");
                return;
            }
            c => InputEvent::Insert(c),
        };
        out.push(event);
    }
}

/// Control keys abandon a half-read escape sequence and act as typed.
fn is_c0_or_del(ch: char) -> bool {
    ch < '\u{20}' || ch == '\u{7f}'
}

fn classify_csi(params: &str, final_byte: char) -> Option<InputEvent> {
    match final_byte {
        'A' => Some(InputEvent::HistoryPrev),
        'B' => Some(InputEvent::HistoryNext),
        'C' => Some(InputEvent::CursorRight),
        'D' => Some(InputEvent::CursorLeft),
        'H' => Some(InputEvent::MoveHome),
        'F' => Some(InputEvent::MoveEnd),
        '~' => match params.split(';').next().unwrap_or_default() {
            "1" | "7" => Some(InputEvent::MoveHome),
            "4" | "8" => Some(InputEvent::MoveEnd),
            "3" => Some(InputEvent::DeleteForward),
            _ => None,
        },
        _ => None,
    }
}

fn classify_ss3(final_byte: char) -> Option<InputEvent> {
    match final_byte {
        'A' => Some(InputEvent::HistoryPrev),
        'B' => Some(InputEvent::HistoryNext),
        'C' => Some(InputEvent::CursorRight),
        'D' => Some(InputEvent::CursorLeft),
        'H' => Some(InputEvent::MoveHome),
        'F' => Some(InputEvent::MoveEnd),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/input.rs"]
mod tests;
