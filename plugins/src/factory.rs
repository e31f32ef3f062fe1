use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use osprey_core::api::{AppConfig, KeyValueStore, MemoryStore, RawFetcher, RepoSource, StoreProvider};

use crate::fetch::HttpRawFetcher;
use crate::github::GithubRepoSource;
use crate::store::FileStore;

pub fn build_store(cfg: &AppConfig) -> Arc<dyn KeyValueStore> {
    match &cfg.store.provider {
        StoreProvider::File(file_cfg) => {
            let dir = file_cfg
                .dir
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(FileStore::default_dir);
            tracing::debug!(target: "osprey.store", dir = %dir.display(), "using file store");
            Arc::new(FileStore::new(dir))
        }
        StoreProvider::Memory(_) => Arc::new(MemoryStore::new()),
    }
}

pub fn build_repo_source(cfg: &AppConfig) -> Result<Option<Arc<dyn RepoSource>>> {
    if !cfg.sync.enabled {
        return Ok(None);
    }
    let source = GithubRepoSource::new(cfg.sync.api_base.clone(), &cfg.sync.user_agent, cfg.sync.timeout_ms)?;
    Ok(Some(Arc::new(source)))
}

pub fn build_fetcher(cfg: &AppConfig) -> Result<Arc<dyn RawFetcher>> {
    Ok(Arc::new(HttpRawFetcher::new(&cfg.sync.user_agent, cfg.sync.timeout_ms)?))
}
