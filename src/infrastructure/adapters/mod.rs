//! Host adapters - Implementations of the plugin host API

pub mod console;
pub mod memory;

pub use console::ConsoleHost;
pub use memory::{HostEvent, MemoryHost};
