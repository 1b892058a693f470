//! Plugin manager - handles plugin lifecycle and registration

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::application::errors::{BotError, CommandError};
use crate::domain::entities::CommandRegistry;
use crate::infrastructure::config::Config;
use super::fortune::FortunePlugin;
use super::trait_def::Plugin;

/// Manages all plugins for the bot
#[derive(Default)]
pub struct PluginManager {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the plugin set a config asks for. `seed` overrides the
    /// configured one.
    pub fn from_config(config: &Config, seed: Option<u64>) -> Result<Self, BotError> {
        let mut manager = Self::new();

        if config.plugins.fortune.enabled {
            let rng = match seed.or(config.random.seed) {
                Some(seed) => {
                    info!("Seeding fortune plugin with {}", seed);
                    StdRng::seed_from_u64(seed)
                }
                None => StdRng::from_entropy(),
            };
            manager.register(FortunePlugin::new(rng))?;
        } else {
            info!("Fortune plugin disabled");
        }

        Ok(manager)
    }

    /// Register a plugin
    pub fn register<P: Plugin + 'static>(&mut self, plugin: P) -> Result<(), BotError> {
        let name = plugin.name().to_string();

        if self.has_plugin(&name) {
            return Err(BotError::Plugin(format!("Plugin '{}' already registered", name)));
        }

        info!("Registering plugin: {}", name);
        self.plugins.push(Arc::new(plugin));
        Ok(())
    }

    /// Unregister a plugin
    pub fn unregister(&mut self, name: &str) -> Result<(), BotError> {
        let Some(pos) = self.plugins.iter().position(|p| p.name() == name) else {
            warn!("Plugin '{}' not found", name);
            return Err(BotError::Plugin(format!("Plugin '{}' not found", name)));
        };

        self.plugins.remove(pos).cleanup();
        info!("Unregistered plugin: {}", name);
        Ok(())
    }

    /// Let every plugin bind its commands. Returns how many plugins loaded.
    pub fn install(&self, registry: &mut CommandRegistry) -> Result<usize, CommandError> {
        for plugin in &self.plugins {
            plugin.register(registry)?;
            info!("Loaded plugin: {}", plugin.name());
        }
        Ok(self.plugins.len())
    }

    /// List all registered plugins
    pub fn list_plugins(&self) -> Vec<PluginInfo> {
        self.plugins
            .iter()
            .map(|plugin| PluginInfo {
                name: plugin.name().to_string(),
                description: plugin.description().to_string(),
                metadata: plugin.metadata(),
            })
            .collect()
    }

    /// Check if a plugin exists
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }
}

/// Plugin information for listing
#[derive(Debug, Clone, serde::Serialize)]
pub struct PluginInfo {
    pub name: String,
    pub description: String,
    pub metadata: std::collections::HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads_fortune() {
        let manager = PluginManager::from_config(&Config::default(), Some(1)).unwrap();
        let mut registry = CommandRegistry::new();

        assert_eq!(manager.install(&mut registry).unwrap(), 1);
        let cmd = registry.get("/fortune").unwrap();
        assert_eq!(cmd.description, "Send a fortune to the contact of the current window");

        let info = &manager.list_plugins()[0];
        assert_eq!(info.name, "fortune");
        assert_eq!(info.metadata["fortunes"], "3");
    }

    #[test]
    fn disabled_fortune_registers_nothing() {
        let mut config = Config::default();
        config.plugins.fortune.enabled = false;

        let manager = PluginManager::from_config(&config, None).unwrap();
        let mut registry = CommandRegistry::new();

        assert_eq!(manager.install(&mut registry).unwrap(), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_and_missing_plugins() {
        let mut manager = PluginManager::new();
        manager.register(FortunePlugin::new(StdRng::seed_from_u64(0))).unwrap();

        assert!(manager.register(FortunePlugin::new(StdRng::seed_from_u64(1))).is_err());
        assert!(manager.unregister("nope").is_err());
        manager.unregister("fortune").unwrap();
        assert!(!manager.has_plugin("fortune"));
    }
}
