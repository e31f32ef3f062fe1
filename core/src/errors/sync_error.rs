// core/src/errors/sync_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("transport error")]
    Transport(#[source] anyhow::Error),

    #[error("decode/serde error")]
    Decode(#[source] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("transport error for {url}")]
    Transport { url: String, #[source] source: anyhow::Error },

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}
