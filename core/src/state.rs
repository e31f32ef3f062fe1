use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::{Local, Timelike, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::StoreError;
use crate::exec::{RawFetcher, VirtualFs};
use crate::mongoose::{ContextEntry, LearnerMetrics, Mode, Pattern, PatternLearner};
use crate::store::{
    load_json, save_json, KeyValueStore, COUNTERS_KEY, EMISSIONS_KEY, HISTORY_KEY, LEARNER_METRICS_KEY, METRICS_KEY,
    PATTERNS_KEY, SYNC_CACHE_KEY, VFS_KEY,
};
use crate::sync::{RepoSource, SyncCache, SyncEngine};
use crate::theme::{HistoryEntry, ThemeEngine};
use crate::token_machine::{EmittedToken, TokenMachine};
use crate::valuation::{ActivityMetrics, TokenValuation};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCounters {
    #[serde(default)]
    pub commands_run: u64,
    #[serde(default)]
    pub successes: u64,
    #[serde(default)]
    pub failures: u64,
}

/// Everything a command handler may read or mutate.
///
/// Owned by the router and lent to handlers as `&mut`, so there is never
/// more than one writer.
pub struct ShellState {
    pub counters: SessionCounters,
    pub theme: ThemeEngine,
    pub learner: PatternLearner,
    pub sync: SyncEngine,
    pub valuation: TokenValuation,
    pub tokens: TokenMachine,
    pub fs: VirtualFs,
    pub rng: StdRng,
    store: Arc<dyn KeyValueStore>,
    repo_source: Option<Arc<dyn RepoSource>>,
    fetcher: Option<Arc<dyn RawFetcher>>,
    started_at: Instant,
    session_id: Uuid,
}

impl ShellState {
    /// Restores persisted state from `store`. Missing or malformed entries load as defaults.
    pub fn load(cfg: &AppConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let now = now_ms();
        let s = store.as_ref();

        let mode = cfg.mongoose.mode.parse::<Mode>().unwrap_or_else(|_| {
            tracing::warn!(target: "osprey.config", mode = %cfg.mongoose.mode, "unknown mongoose mode, using passive");
            Mode::Passive
        });
        let learner = PatternLearner::new(mode, cfg.mongoose.operator.clone()).with_state(
            load_json::<BTreeMap<String, Pattern>>(s, PATTERNS_KEY),
            load_json::<LearnerMetrics>(s, LEARNER_METRICS_KEY),
        );

        let theme = ThemeEngine::new(&cfg.theme)
            .with_history(load_json::<BTreeMap<String, Vec<HistoryEntry>>>(s, HISTORY_KEY));
        let sync = SyncEngine::new(cfg.sync.owner.clone(), now).with_cache(load_json::<SyncCache>(s, SYNC_CACHE_KEY));

        let mut valuation = TokenValuation::new(load_json::<ActivityMetrics>(s, METRICS_KEY));
        valuation.start_session();

        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let session_id = Uuid::new_v4();
        tracing::debug!(target: "osprey.store", store = store.name(), session = %session_id, "session state loaded");

        Self {
            counters: load_json(s, COUNTERS_KEY),
            theme,
            learner,
            sync,
            valuation,
            tokens: TokenMachine::new(load_json::<Vec<EmittedToken>>(s, EMISSIONS_KEY)),
            fs: load_json(s, VFS_KEY),
            rng,
            store,
            repo_source: None,
            fetcher: None,
            started_at: Instant::now(),
            session_id,
        }
    }

    pub fn with_repo_source(mut self, source: Arc<dyn RepoSource>) -> Self {
        self.repo_source = Some(source);
        self
    }

    pub fn with_fetcher(mut self, fetcher: Arc<dyn RawFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Cloned so callers can await on it while holding `&mut self`.
    pub fn repo_source(&self) -> Option<Arc<dyn RepoSource>> {
        self.repo_source.clone()
    }

    pub fn fetcher(&self) -> Option<Arc<dyn RawFetcher>> {
        self.fetcher.clone()
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn local_hour(&self) -> u32 {
        Local::now().hour()
    }

    /// Bookkeeping that follows every non-empty dispatch.
    pub(crate) fn record_dispatch(&mut self, verb: &str, args: &[String], line: &str, output: &str, success: bool) {
        self.counters.commands_run += 1;
        if success {
            self.counters.successes += 1;
        } else {
            self.counters.failures += 1;
        }

        let timestamp = now_ms();
        self.learner.analyze_command(ContextEntry {
            command: verb.to_string(),
            args: args.to_vec(),
            timestamp,
            hour: self.local_hour(),
            theme: self.theme.current().to_string(),
        });
        self.learner.analyze_output(output);

        self.valuation.record_command();
        self.valuation.touch(self.elapsed_secs());
        self.theme.save_to_history(line, timestamp);
    }

    /// Clears the learner and drops its persisted keys.
    pub fn reset_learner(&mut self) -> Result<(), StoreError> {
        self.learner.reset();
        self.store.remove(PATTERNS_KEY)?;
        self.store.remove(LEARNER_METRICS_KEY)?;
        Ok(())
    }

    /// Writes every persisted key.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        self.valuation.touch(self.elapsed_secs());
        let s = self.store.as_ref();
        save_json(s, COUNTERS_KEY, &self.counters)?;
        save_json(s, METRICS_KEY, self.valuation.metrics())?;
        save_json(s, PATTERNS_KEY, self.learner.patterns())?;
        save_json(s, LEARNER_METRICS_KEY, self.learner.metrics())?;
        save_json(s, SYNC_CACHE_KEY, &self.sync.to_cache())?;
        save_json(s, EMISSIONS_KEY, self.tokens.emitted())?;
        save_json(s, VFS_KEY, &self.fs)?;
        save_json(s, HISTORY_KEY, self.theme.all_history())?;
        tracing::debug!(target: "osprey.store", commands = self.counters.commands_run, "session state persisted");
        Ok(())
    }
}

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
