//! Domain traits - Abstractions for host implementations

pub mod host;

pub use host::HostApi;
