use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use osprey_core::api::{RepoInfo, RepoSource, SyncError};
use serde::de::DeserializeOwned;

/// Unauthenticated GitHub REST client for repository metadata.
pub struct GithubRepoSource {
    base_url: String,
    http: reqwest::Client,
}

impl GithubRepoSource {
    pub fn new(base_url: String, user_agent: &str, timeout_ms: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SyncError> {
        tracing::debug!(target: "osprey.sync", url, "GET");
        let resp = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| SyncError::Transport(e.into()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SyncError::HttpStatus {
                status: status.as_u16(),
            });
        }
        resp.json::<T>()
            .await
            .map_err(|e| SyncError::Decode(e.into()))
    }
}

#[async_trait]
impl RepoSource for GithubRepoSource {
    fn name(&self) -> &str {
        "github"
    }

    async fn repo_info(&self, owner: &str, repo: &str) -> Result<RepoInfo, SyncError> {
        let url = format!("{}/repos/{owner}/{repo}", self.base_url);
        self.get_json(&url).await
    }

    /// Anything other than a JSON array (a single file, say) counts as zero entries.
    async fn content_count(&self, owner: &str, repo: &str) -> Result<usize, SyncError> {
        let url = format!("{}/repos/{owner}/{repo}/contents", self.base_url);
        let body: serde_json::Value = self.get_json(&url).await?;
        Ok(body.as_array().map_or(0, Vec::len))
    }
}
