use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::repos::{calculate_production, default_repos, Authority, LegendRepo, ProductionData};
use super::r#trait::RepoSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncFailure {
    pub repo: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStatus {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub last_full_sync: Option<i64>,
    #[serde(default)]
    pub total_production: u64,
    #[serde(default)]
    pub repo_count: usize,
    #[serde(default)]
    pub errors: Vec<SyncFailure>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSummary {
    pub synced: usize,
    pub failed: usize,
    pub production: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CachedRepo {
    #[serde(default)]
    pub last_sync: Option<i64>,
    #[serde(default)]
    pub production_data: ProductionData,
}

/// Persisted shape of the sync engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncCache {
    #[serde(default)]
    pub sync_status: SyncStatus,
    #[serde(default)]
    pub repos: BTreeMap<String, CachedRepo>,
}

#[derive(Debug, Clone)]
pub struct SyncEngine {
    owner: String,
    repos: Vec<LegendRepo>,
    status: SyncStatus,
}

impl SyncEngine {
    pub fn new(owner: impl Into<String>, now_ms: i64) -> Self {
        Self {
            owner: owner.into(),
            repos: default_repos(now_ms),
            status: SyncStatus::default(),
        }
    }

    /// Restores cached production data. Repos missing from the registry are ignored.
    pub fn with_cache(mut self, cache: SyncCache) -> Self {
        self.status = cache.sync_status;
        // a sync cannot be in flight across sessions
        self.status.active = false;
        for repo in self.repos.iter_mut() {
            if let Some(cached) = cache.repos.get(repo.name) {
                repo.last_sync = cached.last_sync;
                repo.production = cached.production_data.clone();
            }
        }
        self
    }

    pub fn to_cache(&self) -> SyncCache {
        SyncCache {
            sync_status: self.status.clone(),
            repos: self
                .repos
                .iter()
                .map(|r| {
                    (
                        r.name.to_string(),
                        CachedRepo {
                            last_sync: r.last_sync,
                            production_data: r.production.clone(),
                        },
                    )
                })
                .collect(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repos(&self) -> &[LegendRepo] {
        &self.repos
    }

    pub fn status(&self) -> &SyncStatus {
        &self.status
    }

    /// Syncs every non-local repo in turn. Per-repo failures are collected
    /// into the status and logged; the call itself never fails.
    pub async fn sync_all(&mut self, source: &dyn RepoSource, now_ms: i64) -> SyncSummary {
        tracing::info!(target: "osprey.sync", source = source.name(), owner = %self.owner, "starting multi-repo sync");
        self.status.active = true;
        self.status.errors.clear();

        let mut synced = 0usize;
        let mut total = 0u64;
        let owner = self.owner.clone();

        for repo in self.repos.iter_mut() {
            match repo.authority {
                Authority::Local => continue,
                Authority::ReadOnly => {
                    read_authority_repo(source, &owner, repo, now_ms).await;
                    continue;
                }
                Authority::None => {}
            }

            match sync_repo(source, &owner, repo, now_ms).await {
                Ok(production) => {
                    total += production;
                    synced += 1;
                }
                Err(error) => {
                    tracing::warn!(target: "osprey.sync", repo = repo.name, %error, "repo sync failed");
                    self.status.errors.push(SyncFailure {
                        repo: repo.name.to_string(),
                        error,
                    });
                }
            }
        }

        self.status.active = false;
        self.status.last_full_sync = Some(now_ms);
        self.status.total_production = total;
        self.status.repo_count = synced;

        tracing::info!(target: "osprey.sync", repos = synced, production = total, "sync complete");
        SyncSummary {
            synced,
            failed: self.status.errors.len(),
            production: total,
        }
    }

    /// Production across all repos, including cached values.
    pub fn aggregated_production(&self) -> u64 {
        self.repos.iter().map(|r| r.production.production).sum()
    }

    pub fn synced_count(&self) -> usize {
        self.repos.iter().filter(|r| r.last_sync.is_some()).count()
    }

    /// One token per ten production units.
    pub fn token_contribution(&self) -> u64 {
        (self.aggregated_production() as f64 * 0.1).floor() as u64
    }
}

async fn read_authority_repo(source: &dyn RepoSource, owner: &str, repo: &mut LegendRepo, now_ms: i64) {
    match source.content_count(owner, repo.name).await {
        Ok(files) => {
            repo.production = ProductionData {
                file_count: files as u64,
                timestamp: Some(now_ms),
                authority: true,
                ..ProductionData::default()
            };
            repo.last_sync = Some(now_ms);
            tracing::debug!(target: "osprey.sync", repo = repo.name, files, "read authority repo");
        }
        Err(e) => {
            tracing::warn!(target: "osprey.sync", repo = repo.name, error = %e, "could not read authority repo, keeping cached data");
        }
    }
}

async fn sync_repo(source: &dyn RepoSource, owner: &str, repo: &mut LegendRepo, now_ms: i64) -> Result<u64, String> {
    let info = source
        .repo_info(owner, repo.name)
        .await
        .map_err(|e| format!("Sync failed: {e}"))?;

    // A failed listing still counts the repo, with zero files.
    let file_count = match source.content_count(owner, repo.name).await {
        Ok(n) => n,
        Err(e) => {
            tracing::debug!(target: "osprey.sync", repo = repo.name, error = %e, "contents unavailable");
            0
        }
    };

    let production = calculate_production(&info, file_count);
    repo.production = ProductionData {
        size: info.size,
        stars: info.stargazers_count,
        forks: info.forks_count,
        file_count: file_count as u64,
        production,
        timestamp: Some(now_ms),
        authority: false,
    };
    repo.last_sync = Some(now_ms);
    Ok(production)
}
