//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the crate (kernel-facing).
//! - `adapters`: OS/runtime specific implementations (IO/async).
//! - `host`: drives sessions and routes executor results back over the bus.

pub mod adapters;
pub mod bus;
pub mod host;
pub mod ports;

pub use bus::{host_bus, HostBusReceiver, HostBusSender, HostMessage};
pub use host::{SessionOutput, TerminalHost};
