use osprey_core::api::{AppContext, CliError, Dispatch};

use crate::commands::cli::ExecArgs;
use crate::presenter::MascotPresenter;
use crate::stdio::read_stdin_text;

/// Runs the given line, or each line of a stdin script, then persists.
///
/// Exits 1 if any line was not handled by a table.
pub async fn run(ctx: &AppContext, args: ExecArgs, mascots: bool) -> Result<i32, CliError> {
    let lines: Vec<String> = if args.reads_stdin() {
        read_stdin_text()?.lines().map(str::to_string).collect()
    } else {
        vec![args.line.join(" ")]
    };

    let mut router = ctx.build_router(MascotPresenter::boxed_if(mascots));
    let mut all_handled = true;
    for line in &lines {
        if let Some(Dispatch { text, status, .. }) = router.dispatch(line).await {
            println!("{text}");
            all_handled &= status.is_success();
        }
    }
    router.persist()?;
    Ok(if all_handled { 0 } else { 1 })
}
