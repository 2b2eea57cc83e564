//! Real-terminal frontend for the demo binary (crossterm).
//!
//! Kept apart from `kernel` so the session core has no terminal dependency.

pub mod output;
pub mod terminal_guard;

pub use output::AnsiWriter;
pub use terminal_guard::{install_panic_hook, TerminalGuard, TerminalRestorer};
