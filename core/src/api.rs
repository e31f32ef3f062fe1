//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `osprey_core::api` instead of reaching into internal modules.

pub use crate::commands::{default_registry, CLEAR_SCREEN, HELP};
pub use crate::config::{load_default, load_from, AppConfig, FileStoreConfig, LoggingConfig, StoreProvider, SyncConfig};
pub use crate::context::{AppContext, Services, ServicesFactory};
pub use crate::errors::{CliError, CommandError, ConfigError, FetchError, StoreError, SyncError};
pub use crate::exec::RawFetcher;
pub use crate::presenter::{Presenter, PresenterEvent};
pub use crate::router::{
    CommandHandler, CommandTable, Dispatch, DispatchStatus, Fallback, RogersFallback, Router, TableRegistry,
};
pub use crate::state::{now_ms, SessionCounters, ShellState};
pub use crate::store::{KeyValueStore, MemoryStore};
pub use crate::sync::{format_status, RepoInfo, RepoSource, SyncEngine, SyncSummary};
