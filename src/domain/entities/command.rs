use std::fmt;

use crate::application::errors::CommandError;
use crate::domain::traits::HostApi;

/// Command handler function type
pub type CommandHandler =
    Box<dyn Fn(&mut dyn HostApi, &[String]) -> Result<(), CommandError> + Send + Sync>;

/// Represents a chat command bound by a plugin
pub struct Command {
    pub name: String,
    pub description: String,
    handler: CommandHandler,
}

impl Command {
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut dyn HostApi, &[String]) -> Result<(), CommandError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            handler: Box::new(handler),
        }
    }

    /// Command names are compared exactly, slash included
    pub fn matches(&self, input: &str) -> bool {
        self.name == input
    }

    /// Run the handler with the tokens that followed the command name
    pub fn invoke(&self, host: &mut dyn HostApi, args: &[String]) -> Result<(), CommandError> {
        (self.handler)(host, args)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Command registry for managing available commands
///
/// Keeps registration order, which is also the order of the help listing.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `handler`.
    ///
    /// Names must start with `/`. Registering a name twice swaps in the new
    /// handler and keeps the help text from the first registration.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) -> Result<(), CommandError>
    where
        F: Fn(&mut dyn HostApi, &[String]) -> Result<(), CommandError> + Send + Sync + 'static,
    {
        self.insert(Command::new(name, description, handler))
    }

    pub fn insert(&mut self, command: Command) -> Result<(), CommandError> {
        if !command.name.starts_with('/') {
            return Err(CommandError::InvalidName(command.name));
        }

        if let Some(existing) = self.commands.iter_mut().find(|c| c.matches(&command.name)) {
            tracing::debug!("Replacing handler for {}", command.name);
            existing.handler = command.handler;
            return Ok(());
        }

        tracing::debug!("Registered command {}", command.name);
        self.commands.push(command);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.matches(name))
    }

    pub fn all(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
