// core/src/errors/command_error.rs
use thiserror::Error;

use super::store_error::StoreError;

/// Failure raised by a single command handler.
///
/// The router never lets one of these escape: it is rendered inline as
/// `Error: <message>` and counted as a failed command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("usage: {0}")]
    Usage(String),

    #[error("invalid argument `{arg}`: {reason}")]
    InvalidArgument { arg: String, reason: String },

    #[error("{0} is not available in this session")]
    Unavailable(&'static str),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
