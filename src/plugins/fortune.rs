//! Fortune plugin - registers `/fortune`

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;

use crate::application::errors::CommandError;
use crate::application::services::fortune_service::{FortuneService, COMMAND_HELP, COMMAND_NAME};
use crate::domain::entities::{CommandRegistry, FortuneTable};
use crate::domain::traits::HostApi;
use super::trait_def::Plugin;

pub struct FortunePlugin<R> {
    service: Arc<FortuneService<R>>,
}

impl<R: Rng + Send + 'static> FortunePlugin<R> {
    /// Plugin over the built-in fortunes
    pub fn new(rng: R) -> Self {
        Self::with_table(FortuneTable::default(), rng)
    }

    pub fn with_table(table: FortuneTable, rng: R) -> Self {
        Self {
            service: Arc::new(FortuneService::new(table, rng)),
        }
    }
}

impl<R: Rng + Send + 'static> Plugin for FortunePlugin<R> {
    fn name(&self) -> &str {
        "fortune"
    }

    fn description(&self) -> &str {
        COMMAND_HELP
    }

    fn register(&self, registry: &mut CommandRegistry) -> Result<(), CommandError> {
        let service = Arc::clone(&self.service);
        registry.register(COMMAND_NAME, COMMAND_HELP, move |host: &mut dyn HostApi, args: &[String]| {
            service.handle(host, args)?;
            Ok(())
        })
    }

    fn metadata(&self) -> HashMap<String, String> {
        let mut meta = HashMap::new();
        meta.insert("command".to_string(), COMMAND_NAME.to_string());
        meta.insert("fortunes".to_string(), self.service.table().len().to_string());
        meta
    }
}
