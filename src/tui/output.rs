use std::io::{self, Write};

use crate::kernel::display::{encode_ansi, DisplayOp};

/// Writes display ops to a VT100 terminal, one flush per batch.
pub struct AnsiWriter<W: Write> {
    out: W,
}

impl<W: Write> AnsiWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn render(&mut self, ops: &[DisplayOp]) -> io::Result<()> {
        if ops.is_empty() {
            return Ok(());
        }
        self.out.write_all(encode_ansi(ops).as_bytes())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/output.rs"]
mod tests;
