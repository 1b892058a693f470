//! Command handling - Parsing and dispatching typed command lines

pub mod dispatcher;
pub mod parser;

pub use dispatcher::{CommandDispatcher, Outcome};
pub use parser::{CommandParser, ParsedCommand};
