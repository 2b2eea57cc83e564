//! Data models shared by the kernel and the service adapters.

pub mod command_history;

pub use command_history::{
    entry_from_newest, find_recent, CommandHistory, DEFAULT_HISTORY_CAPACITY,
};
