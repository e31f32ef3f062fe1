// core/src/errors/store_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error on key `{key}`")]
    Io { key: String, #[source] source: std::io::Error },

    #[error("could not encode value for key `{key}`")]
    Encode { key: String, #[source] source: serde_json::Error },

    #[error("invalid store key `{0}`")]
    InvalidKey(String),
}
