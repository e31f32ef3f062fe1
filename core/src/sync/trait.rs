use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::SyncError;

/// Subset of the repository metadata the production formula reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepoInfo {
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
}

#[async_trait]
pub trait RepoSource: Send + Sync {
    fn name(&self) -> &str;

    async fn repo_info(&self, owner: &str, repo: &str) -> Result<RepoInfo, SyncError>;

    /// Number of top-level entries in the repository.
    async fn content_count(&self, owner: &str, repo: &str) -> Result<usize, SyncError>;
}
