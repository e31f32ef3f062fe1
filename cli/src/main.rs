use clap::Parser;

mod app;
mod commands;
mod logging;
mod presenter;
mod stdio;

use commands::cli;
use osprey_core::api::CliError;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let mut args = cli::Args::parse();
    let cmd = args.command.take().unwrap_or(cli::Commands::Repl);

    let cfg = app::load_config(&args)?;
    let guard = logging::init(&cfg.logging);
    let ctx = app::build_context(cfg, &args)?;

    let exit = match cmd {
        cli::Commands::Repl => commands::repl::run(&ctx, args.mascots).await?,
        cli::Commands::Exec(exec_args) => commands::exec::run(&ctx, exec_args, args.mascots).await?,
        cli::Commands::Sync => commands::sync::run(&ctx).await?,
    };

    if exit != 0 {
        // flush the file appender before exiting
        drop(guard);
        std::process::exit(exit);
    }
    Ok(())
}
