//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod dirs;
pub mod history;
pub mod settings;
pub mod simulator;

pub use dirs::{ensure_history_dir, ensure_log_dir, get_history_dir, get_log_dir};
pub use history::{FileHistoryStore, MemoryHistoryStore};
pub use settings::{
    ensure_settings_file, get_settings_path, load_or_default, load_settings, load_settings_from,
};
pub use simulator::SimulatedCluster;
