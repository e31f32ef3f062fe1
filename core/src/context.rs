use std::sync::Arc;

use crate::commands::default_registry;
use crate::config::AppConfig;
use crate::errors::CliError;
use crate::exec::RawFetcher;
use crate::presenter::Presenter;
use crate::router::{RogersFallback, Router};
use crate::state::ShellState;
use crate::store::KeyValueStore;
use crate::sync::RepoSource;

/// Collaborators built from configuration by a [`ServicesFactory`].
#[derive(Clone)]
pub struct Services {
    pub store: Arc<dyn KeyValueStore>,
    /// `None` when sync is disabled or the session is offline.
    pub repo_source: Option<Arc<dyn RepoSource>>,
    pub fetcher: Option<Arc<dyn RawFetcher>>,
}

pub trait ServicesFactory {
    fn build_services(&self, cfg: &AppConfig) -> Result<Services, CliError>;
}

#[derive(Clone)]
pub struct AppContext {
    cfg: AppConfig,
    services: Services,
}

impl AppContext {
    pub fn new(cfg: AppConfig, factory: &dyn ServicesFactory) -> Result<Self, CliError> {
        let services = factory.build_services(&cfg)?;
        Ok(Self { cfg, services })
    }

    pub fn with_services(cfg: AppConfig, services: Services) -> Self {
        Self { cfg, services }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.cfg
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Loads session state from the store and wires in the network collaborators.
    pub fn load_state(&self) -> ShellState {
        let mut state = ShellState::load(&self.cfg, self.services.store.clone());
        if let Some(source) = &self.services.repo_source {
            state = state.with_repo_source(source.clone());
        }
        if let Some(fetcher) = &self.services.fetcher {
            state = state.with_fetcher(fetcher.clone());
        }
        state
    }

    /// The stock router: default tables, Rogers fallback, configured autosave.
    pub fn build_router(&self, presenter: Option<Box<dyn Presenter>>) -> Router {
        let mut router = Router::new(default_registry(), self.load_state())
            .with_fallback(RogersFallback)
            .with_fallback_message(self.cfg.fallback_message.clone())
            .with_autosave(self.cfg.autosave_every);
        if let Some(presenter) = presenter {
            router = router.with_presenter(presenter);
        }
        router
    }
}
