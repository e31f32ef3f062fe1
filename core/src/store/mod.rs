//! Key-value persistence for session state.
//!
//! Every entry is a plain JSON blob under a string key. Readers go through
//! [`load_json`], which treats missing or malformed entries as absent.

mod helpers;
mod memory;
mod r#trait;

pub use helpers::{load_json, save_json};
pub use memory::MemoryStore;
pub use r#trait::KeyValueStore;

pub const COUNTERS_KEY: &str = "osprey_counters";
pub const METRICS_KEY: &str = "osprey_metrics";
pub const PATTERNS_KEY: &str = "mongoose_patterns";
pub const LEARNER_METRICS_KEY: &str = "mongoose_metrics";
pub const SYNC_CACHE_KEY: &str = "mongoose_repo_sync";
pub const EMISSIONS_KEY: &str = "token_machine_emissions";
pub const VFS_KEY: &str = "exec_fs";
pub const HISTORY_KEY: &str = "osprey_theme_history";
