use osprey_core::api::{format_status, now_ms, AppContext, CliError};

/// One full sync, then the status report. Exits 1 only when every attempt failed.
pub async fn run(ctx: &AppContext) -> Result<i32, CliError> {
    let mut state = ctx.load_state();
    let Some(source) = state.repo_source() else {
        return Err(CliError::Command(
            "sync is disabled in config or the session is offline".to_string(),
        ));
    };

    let summary = state.sync.sync_all(source.as_ref(), now_ms()).await;
    println!("{}", format_status(&state.sync));
    state.persist()?;

    Ok(if summary.synced == 0 && summary.failed > 0 { 1 } else { 0 })
}
