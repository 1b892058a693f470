//! Command dispatcher - Routes command lines to registered handlers

use crate::application::errors::CommandError;
use crate::domain::entities::CommandRegistry;
use crate::domain::traits::HostApi;
use super::parser::CommandParser;

/// What happened to an input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line
    Ignored,
    /// Not a command; the caller decides what to do with the text
    Text(String),
    /// A handler ran to completion
    Handled { command: String },
    /// The error was already shown to the local user
    Rejected(CommandError),
}

/// Runs one command line at a time against the registry
pub struct CommandDispatcher {
    parser: CommandParser,
    registry: CommandRegistry,
}

impl CommandDispatcher {
    pub fn new(prefix: impl Into<String>, registry: CommandRegistry) -> Self {
        Self {
            parser: CommandParser::new(prefix),
            registry,
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Dispatch a line typed in the focused window.
    ///
    /// Errors never escape: they are displayed on the host and returned as
    /// `Outcome::Rejected`.
    pub fn dispatch(&self, host: &mut dyn HostApi, line: &str) -> Outcome {
        if line.trim().is_empty() {
            return Outcome::Ignored;
        }

        let parsed = match self.parser.parse(line) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => return Outcome::Text(line.to_string()),
            Err(e) => return Self::reject(host, e),
        };

        let Some(cmd) = self.registry.get(&parsed.name) else {
            tracing::debug!("No handler for {}", parsed.name);
            return Self::reject(host, CommandError::NotFound(parsed.name));
        };

        tracing::debug!("Dispatching {} with args: {:?}", cmd.name, parsed.args);
        match cmd.invoke(host, &parsed.args) {
            Ok(()) => Outcome::Handled { command: parsed.name },
            Err(e) => {
                tracing::warn!("{} failed: {}", parsed.name, e);
                Self::reject(host, e)
            }
        }
    }

    fn reject(host: &mut dyn HostApi, err: CommandError) -> Outcome {
        host.display(&err.to_string());
        Outcome::Rejected(err)
    }
}
