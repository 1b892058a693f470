//! Domain layer - Core types with no I/O
//!
//! This layer contains:
//! - Entities: Fortune table, commands and the command registry
//! - Traits: Capabilities the chat host hands to plugins

pub mod entities;
pub mod traits;
