//! Application services - Command handling and help

pub mod command_service;
pub mod fortune_service;

pub use command_service::{CommandInfo, CommandService};
pub use fortune_service::FortuneService;
