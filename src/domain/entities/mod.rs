//! Domain entities - Core objects shared by the host and its plugins

pub mod command;
pub mod fortune;

pub use command::{Command, CommandHandler, CommandRegistry};
pub use fortune::{FortuneTable, FORTUNES};
