//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Host implementations (console, in-memory)

pub mod config;
pub mod adapters;
