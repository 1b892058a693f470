//! Application layer - Use cases
//!
//! This layer contains:
//! - Services: the fortune handler and the help listing
//! - Errors: user-facing and internal error types
//! - Messaging: command line parsing and dispatching

pub mod errors;
pub mod services;
pub mod messaging;
