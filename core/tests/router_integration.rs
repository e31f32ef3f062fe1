//! Integration tests for the stock router
//!
//! These tests drive full lines through the default tables and check what
//! comes back and what gets persisted.

use std::sync::Arc;

use async_trait::async_trait;
use osprey_core::api::{
    default_registry, AppConfig, AppContext, CommandTable, DispatchStatus, FetchError, KeyValueStore, MemoryStore,
    RawFetcher, RepoInfo, RepoSource, Router, Services, ShellState, SyncError, CLEAR_SCREEN, HELP,
};
use pretty_assertions::assert_eq;

struct StaticSource;

#[async_trait]
impl RepoSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn repo_info(&self, _owner: &str, repo: &str) -> Result<RepoInfo, SyncError> {
        if repo == "legend-⛓️-chain" {
            return Err(SyncError::HttpStatus { status: 403 });
        }
        Ok(RepoInfo {
            size: 50,
            stargazers_count: 0,
            forks_count: 1,
        })
    }

    async fn content_count(&self, _owner: &str, _repo: &str) -> Result<usize, SyncError> {
        Ok(1)
    }
}

struct StaticFetcher;

#[async_trait]
impl RawFetcher for StaticFetcher {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        if url.contains("missing") {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: 404,
            });
        }
        Ok("print('hi')".to_string())
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        seed: Some(42),
        autosave_every: 0,
        ..AppConfig::default()
    }
}

fn context_with(store: Arc<MemoryStore>, online: bool) -> AppContext {
    let services = Services {
        store,
        repo_source: online.then(|| Arc::new(StaticSource) as Arc<dyn RepoSource>),
        fetcher: online.then(|| Arc::new(StaticFetcher) as Arc<dyn RawFetcher>),
    };
    AppContext::with_services(test_config(), services)
}

fn router() -> Router {
    context_with(Arc::new(MemoryStore::new()), true).build_router(None)
}

async fn run(router: &mut Router, line: &str) -> String {
    router.dispatch(line).await.expect("non-empty line").text
}

#[tokio::test]
async fn test_help_is_stable() {
    let mut router = router();
    let first = run(&mut router, "help").await;
    let second = run(&mut router, "  help  ").await;
    assert_eq!(first, HELP);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_clear_resolves_to_builtin_even_when_shadowed() {
    let registry = default_registry().with(CommandTable::new("late").command("clear", |_, _| Ok("late".to_string())));
    let state = ShellState::load(&test_config(), Arc::new(MemoryStore::new()));
    let mut router = Router::new(registry, state);

    let d = router.dispatch("clear").await.unwrap();
    assert_eq!(d.text, CLEAR_SCREEN);
    assert_eq!(d.table, "builtin");
}

#[tokio::test]
async fn test_unknown_namespace_is_not_recognized() {
    let mut router = router();
    let d = router.dispatch("unknown:verb").await.unwrap();
    assert_eq!(d.text, "Command not recognized.");
    assert_eq!(d.status, DispatchStatus::Unrecognized);
}

#[tokio::test]
async fn test_blank_input_changes_nothing() {
    let mut router = router();
    assert!(router.dispatch("").await.is_none());
    assert!(router.dispatch(" \t ").await.is_none());
    assert_eq!(router.state().counters.commands_run, 0);
}

#[tokio::test]
async fn test_theme_switching_and_unknown_theme() {
    let mut router = router();
    assert_eq!(run(&mut router, "theme mario").await, "Theme switched to: mario");
    assert_eq!(router.prompt(), "🍄 ");
    assert_eq!(run(&mut router, "theme disco").await, "Theme not found: disco");
    assert_eq!(run(&mut router, "theme:prev").await, "Theme: gaming");
    assert_eq!(router.state().valuation.metrics().theme_switches, 2);
}

#[tokio::test]
async fn test_usage_error_is_inline_and_counted() {
    let mut router = router();
    let d = router.dispatch("cat").await.unwrap();
    assert_eq!(d.text, "Error: usage: cat <path>");
    assert_eq!(d.status, DispatchStatus::Failed);
    assert_eq!(router.state().counters.failures, 1);
}

#[tokio::test]
async fn test_virtual_filesystem_commands() {
    let mut router = router();
    assert_eq!(run(&mut router, "write notes.txt hello  there").await, "Written.");
    assert_eq!(run(&mut router, "mkdir src").await, "Directory created.");
    assert_eq!(run(&mut router, "ls").await, "notes.txt\nsrc/");
    assert_eq!(run(&mut router, "cat notes.txt").await, "hello there");
    assert_eq!(run(&mut router, "rm notes.txt").await, "Removed.");
    assert_eq!(run(&mut router, "cat notes.txt").await, "File not found.");
}

#[tokio::test]
async fn test_cat_of_empty_file_reports_not_found() {
    let mut router = router();
    assert_eq!(run(&mut router, "write empty.txt").await, "Written.");
    assert_eq!(run(&mut router, "ls").await, "empty.txt");
    assert_eq!(run(&mut router, "cat empty.txt").await, "File not found.");
}

#[tokio::test]
async fn test_install_stores_under_last_segment() {
    let mut router = router();
    assert_eq!(
        run(&mut router, "install https://raw.example/o/r/main/app.py").await,
        "Loaded app.py"
    );
    assert_eq!(run(&mut router, "cat app.py").await, "print('hi')");
    assert_eq!(
        run(&mut router, "install https://raw.example/missing/x.py").await,
        "Install error: HTTP 404 for https://raw.example/missing/x.py"
    );
}

#[tokio::test]
async fn test_offline_session_reports_unavailable_sync() {
    let mut router = context_with(Arc::new(MemoryStore::new()), false).build_router(None);
    let d = router.dispatch("mongoose:sync-now").await.unwrap();
    assert_eq!(d.text, "Error: repository sync is not available in this session");
    assert_eq!(d.status, DispatchStatus::Failed);
}

#[tokio::test]
async fn test_sync_now_updates_status_report() {
    let mut router = router();
    let out = run(&mut router, "mongoose:sync-now").await;
    assert!(out.contains("Repos synced: 15"), "{out}");
    assert!(out.contains("Failures: 1"));

    let status = run(&mut router, "mongoose:sync").await;
    // the failed repo never got a sync time
    assert!(status.contains("Repos Synced: 17/18"));
    assert!(status.contains("legend-⛓️-chain: Sync failed: HTTP 403"));
}

#[tokio::test]
async fn test_token_emit_and_formula() {
    let mut router = router();
    let out = run(&mut router, "token:emit write").await;
    assert!(out.contains("Token emitted: TKN-WRITE-"), "{out}");
    assert_eq!(run(&mut router, "token:emit dance").await, "Token action 'dance' not found");
    let out = run(&mut router, "formula:apply crown-signal-white").await;
    assert!(out.contains("Power: 100"));
    let report = run(&mut router, "token:report").await;
    assert!(report.contains("Total Tokens Emitted: 2"));
}

#[tokio::test]
async fn test_learner_sees_every_dispatch() {
    let mut router = router();
    for _ in 0..3 {
        run(&mut router, "elec:scope").await;
    }
    run(&mut router, "nonsense").await;
    let learner = &router.state().learner;
    assert_eq!(learner.patterns()["elec:scope"].count, 3);
    assert_eq!(learner.context_len(), 4);
    let suggest = run(&mut router, "mongoose:suggest").await;
    assert!(suggest.contains("Recommended Command: elec:scope"));
}

#[tokio::test]
async fn test_state_survives_save_and_reload() {
    let store = Arc::new(MemoryStore::new());
    {
        let mut router = context_with(store.clone(), true).build_router(None);
        run(&mut router, "write a.txt 1").await;
        assert!(run(&mut router, "save").await.starts_with("💾 Session saved"));
    }
    let mut router = context_with(store.clone(), true).build_router(None);
    assert_eq!(run(&mut router, "cat a.txt").await, "1");
    // `save` ran before its own dispatch was counted
    assert_eq!(router.state().counters.commands_run, 2);
}

#[tokio::test]
async fn test_corrupted_counters_load_as_defaults() {
    let store = Arc::new(MemoryStore::new());
    store.set("osprey_counters", "][").unwrap();
    let router = context_with(store, true).build_router(None);
    assert_eq!(router.state().counters.commands_run, 0);
    assert_eq!(router.state().counters.failures, 0);
}

#[tokio::test]
async fn test_rogers_answers_questions() {
    let mut router = router();
    let d = router.dispatch("what now?").await.unwrap();
    assert_eq!(d.status, DispatchStatus::Fallback);
    assert!(d.text.starts_with("Rogers:"));
}
