//! labterm: a headless line-editing terminal for a Kubernetes troubleshooting lab.
//!
//! Modules:
//! - models: pure data (bounded command history)
//! - kernel: input parsing, sessions, display edits, progress signal
//! - kernel::services: ports (executor, history, settings) and their adapters
//! - tui: real-terminal frontend used by the demo binary

pub mod kernel;
pub mod models;

#[cfg(feature = "tui")]
pub mod tui;
