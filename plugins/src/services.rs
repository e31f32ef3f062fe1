//! ServicesFactory implementation: builds the store and network collaborators from config for the CLI.
use osprey_core::api::{AppConfig, CliError, Services, ServicesFactory};

use crate::factory;

#[derive(Debug, Clone, Copy, Default)]
pub struct PluginServicesFactory {
    /// Skip every network collaborator.
    pub offline: bool,
}

impl PluginServicesFactory {
    pub fn new(offline: bool) -> Self {
        Self { offline }
    }
}

impl ServicesFactory for PluginServicesFactory {
    fn build_services(&self, cfg: &AppConfig) -> Result<Services, CliError> {
        let store = factory::build_store(cfg);
        if self.offline {
            tracing::info!(target: "osprey.config", "offline session, network commands disabled");
            return Ok(Services {
                store,
                repo_source: None,
                fetcher: None,
            });
        }
        let repo_source = factory::build_repo_source(cfg).map_err(CliError::Plugin)?;
        let fetcher = factory::build_fetcher(cfg).map_err(CliError::Plugin)?;
        Ok(Services {
            store,
            repo_source,
            fetcher: Some(fetcher),
        })
    }
}
