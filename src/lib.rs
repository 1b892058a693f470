//! fortune-bot - a `/fortune` chat command plugin plus a console host to drive it
//!
//! Layers follow the usual split:
//! - domain: fortune table, command registry, host capabilities
//! - application: command parsing, dispatch, the fortune handler itself
//! - infrastructure: config and host adapters
//! - plugins: plugin trait and the fortune plugin

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod plugins;
