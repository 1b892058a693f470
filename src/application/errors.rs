//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Plugin error: {0}")]
    Plugin(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Input errors of the `/fortune` command.
///
/// The display text is what the user sees in the local window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FortuneError {
    #[error("Only one argument allowed!")]
    ArgumentCount,

    #[error("Argument must be a number!")]
    ArgumentType,
}

/// Command registration and execution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid command.")]
    NotFound(String),

    #[error("Command must be prefixed with a '/'")]
    InvalidName(String),

    #[error(transparent)]
    InvalidArgs(#[from] FortuneError),

    #[error("Invalid argument. Did you forget a closing \"?")]
    UnterminatedQuote,

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Failed to write config: {0}")]
    Write(String),
}
