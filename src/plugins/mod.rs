//! Plugin system for fortune-bot
//!
//! Plugins bind their commands into an explicit registry when loaded.

pub mod fortune;
pub mod manager;
pub mod trait_def;

pub use fortune::FortunePlugin;
pub use manager::{PluginInfo, PluginManager};
pub use trait_def::Plugin;
