//! Plugin trait definitions

use std::collections::HashMap;

use crate::application::errors::CommandError;
use crate::domain::entities::CommandRegistry;

/// Core plugin trait that all plugins must implement
pub trait Plugin: Send + Sync {
    /// Unique identifier for the plugin
    fn name(&self) -> &str;

    /// Human-readable description
    fn description(&self) -> &str;

    /// Bind this plugin's commands. Called once when the plugin is loaded.
    fn register(&self, registry: &mut CommandRegistry) -> Result<(), CommandError>;

    /// Optional: Cleanup resources when plugin is unloaded
    fn cleanup(&self) {}

    /// Optional: Get plugin metadata
    fn metadata(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}
