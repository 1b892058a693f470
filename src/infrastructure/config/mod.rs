//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub host: HostConfig,
    #[serde(default)]
    pub plugins: PluginsConfig,
    #[serde(default)]
    pub random: RandomConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
}

/// Identity of the console host
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct HostConfig {
    /// Name used in announcements
    pub nickname: String,
    /// Contact of the single console window
    pub contact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PluginsConfig {
    #[serde(default)]
    pub fortune: FortunePluginConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FortunePluginConfig {
    pub enabled: bool,
}

impl Default for FortunePluginConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RandomConfig {
    /// Fixed seed for reproducible output; entropy when unset
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "fortune-bot".to_string(),
                prefix: "/".to_string(),
            },
            host: HostConfig {
                nickname: "toxic".to_string(),
                contact: "friend".to_string(),
            },
            plugins: PluginsConfig::default(),
            random: RandomConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Write(e.to_string()))
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Ok(nickname) = std::env::var("BOT_NICKNAME") {
            config.host.nickname = nickname;
        }

        if let Ok(contact) = std::env::var("BOT_CONTACT") {
            config.host.contact = contact;
        }

        if let Ok(prefix) = std::env::var("BOT_PREFIX") {
            config.bot.prefix = prefix;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_yaml() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("nickname: toxic"));
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn optional_sections_default() {
        let config = Config::from_yaml(
            "bot:\n  name: b\n  prefix: '!'\nhost:\n  nickname: alice\n  contact: bob\n",
        )
        .unwrap();

        assert_eq!(config.bot.prefix, "!");
        assert!(config.plugins.fortune.enabled);
        assert_eq!(config.random.seed, None);
    }

    #[test]
    fn reads_kebab_case_sections() {
        let config = Config::from_yaml(
            "bot:\n  name: b\n  prefix: /\nhost:\n  nickname: a\n  contact: c\nplugins:\n  fortune:\n    enabled: false\nrandom:\n  seed: 42\n",
        )
        .unwrap();

        assert!(!config.plugins.fortune.enabled);
        assert_eq!(config.random.seed, Some(42));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Config::load("/nonexistent/fortune-bot.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
