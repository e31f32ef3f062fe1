use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use osprey_core::api::{FetchError, RawFetcher};

/// Plain GET of a text document, used by `install`.
pub struct HttpRawFetcher {
    http: reqwest::Client,
}

impl HttpRawFetcher {
    pub fn new(user_agent: &str, timeout_ms: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl RawFetcher for HttpRawFetcher {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let parsed = reqwest::Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }

        let transport = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            source: e.into(),
        };
        let resp = self.http.get(parsed).send().await.map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        resp.text().await.map_err(transport)
    }
}
