use serde::Serialize;

use crate::domain::entities::CommandRegistry;

/// Help text wider than this is cut off in the listing
pub const HELP_TEXT_LIMIT: usize = 50;

/// Width of the name column plus separators
const HELP_PREFIX_WIDTH: usize = 37;

/// Registered command as shown by `commands --json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInfo {
    pub name: String,
    pub description: String,
}

/// Read-only views over the command registry
pub struct CommandService<'a> {
    registry: &'a CommandRegistry,
}

impl<'a> CommandService<'a> {
    pub fn new(registry: &'a CommandRegistry) -> Self {
        Self { registry }
    }

    /// One line per command, in registration order
    pub fn help_lines(&self) -> Vec<String> {
        self.registry
            .all()
            .map(|cmd| {
                let help: String = cmd.description.chars().take(HELP_TEXT_LIMIT).collect();
                format!("  {:<29}: {}", cmd.name, help)
            })
            .collect()
    }

    /// Column width a help window needs to fit every line
    pub fn help_max_width(&self) -> usize {
        let longest = self
            .registry
            .all()
            .map(|cmd| cmd.description.chars().count())
            .max()
            .unwrap_or(0);

        HELP_PREFIX_WIDTH + longest.min(HELP_TEXT_LIMIT)
    }

    pub fn infos(&self) -> Vec<CommandInfo> {
        self.registry
            .all()
            .map(|cmd| CommandInfo {
                name: cmd.name.clone(),
                description: cmd.description.clone(),
            })
            .collect()
    }
}
