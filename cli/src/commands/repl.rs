use std::io::Write;
use std::time::Duration;

use osprey_core::api::{now_ms, AppContext, CliError, Router, SyncConfig};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::presenter::MascotPresenter;
use crate::stdio::{decode_line, ENCODING_ENV};

const BANNER: &str = "🦅 Osprey Terminal\nType 'help' for commands, 'exit' to leave.";

/// Reads lines until EOF or `exit`, syncing in the background between lines.
/// State is persisted on the way out however the session ends.
pub async fn run(ctx: &AppContext, mascots: bool) -> Result<i32, CliError> {
    let mut router = ctx.build_router(MascotPresenter::boxed_if(mascots));
    let mut ticker = sync_ticker(&ctx.cfg().sync, router.state().repo_source().is_some());
    let label = std::env::var(ENCODING_ENV).ok();

    println!("{BANNER}");
    session(&mut router, BufReader::new(tokio::io::stdin()), &mut ticker, label.as_deref()).await;

    router.persist()?;
    tracing::debug!(target: "osprey.router", commands = router.state().counters.commands_run, "session ended");
    Ok(0)
}

async fn session<R>(router: &mut Router, mut input: R, ticker: &mut Option<Interval>, label: Option<&str>)
where
    R: AsyncBufRead + Unpin,
{
    // read_until keeps partial bytes in buf when the ticker wins the race.
    let mut buf = Vec::new();
    show_prompt(router);
    loop {
        tokio::select! {
            read = input.read_until(b'\n', &mut buf) => {
                match read {
                    Ok(0) => break,
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!(target: "osprey.router", error = %e, "stdin closed with an error");
                        break;
                    }
                }
                let line = decode_line(&buf, label);
                buf.clear();
                if is_exit(&line) {
                    break;
                }
                if let Some(d) = router.dispatch(&line).await {
                    println!("{}", d.text);
                }
                show_prompt(router);
            }
            _ = next_tick(ticker) => background_sync(router).await,
        }
    }
}

fn is_exit(line: &str) -> bool {
    matches!(line.trim(), "exit" | "quit")
}

fn show_prompt(router: &Router) {
    let mut out = std::io::stdout();
    if let Err(e) = write!(out, "{}", router.prompt()).and_then(|_| out.flush()) {
        tracing::debug!(target: "osprey.router", error = %e, "could not write prompt");
    }
}

/// `None` when there is nothing to sync against or the interval is zero.
fn sync_ticker(cfg: &SyncConfig, has_source: bool) -> Option<Interval> {
    if !has_source || cfg.interval_secs == 0 {
        return None;
    }
    let start = Instant::now() + Duration::from_secs(cfg.initial_delay_secs);
    let mut ticker = interval_at(start, Duration::from_secs(cfg.interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    Some(ticker)
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(t) => {
            t.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

async fn background_sync(router: &mut Router) {
    let Some(source) = router.state().repo_source() else {
        return;
    };
    let summary = router.state_mut().sync.sync_all(source.as_ref(), now_ms()).await;
    tracing::info!(
        target: "osprey.sync",
        synced = summary.synced,
        failed = summary.failed,
        production = summary.production,
        "background sync finished"
    );
    if let Err(e) = router.persist() {
        tracing::warn!(target: "osprey.store", error = %e, "could not persist after background sync");
    }
}
