//! Pseudo multi-repo sync: polls repository metadata and turns it into
//! synthetic "production" numbers.

mod engine;
mod report;
mod repos;
mod r#trait;

pub use engine::{CachedRepo, SyncCache, SyncEngine, SyncFailure, SyncStatus, SyncSummary};
pub use report::{format_production, format_repos, format_status};
pub use repos::{calculate_production, default_repos, Authority, LegendRepo, ProductionData};
pub use r#trait::{RepoInfo, RepoSource};
