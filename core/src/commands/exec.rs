use async_trait::async_trait;

use crate::errors::CommandError;
use crate::exec::file_name_from_url;
use crate::router::{CommandHandler, CommandTable};
use crate::state::ShellState;

fn path_arg<'a>(args: &'a [String], usage: &str) -> Result<&'a str, CommandError> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| CommandError::Usage(usage.to_string()))
}

/// `install <url>`: fetches raw text into the virtual filesystem.
struct Install;

#[async_trait]
impl CommandHandler for Install {
    async fn call(&self, state: &mut ShellState, args: &[String]) -> Result<String, CommandError> {
        let url = path_arg(args, "install <url>")?;
        let name = file_name_from_url(url).ok_or_else(|| CommandError::InvalidArgument {
            arg: url.to_string(),
            reason: "no file name in url".to_string(),
        })?;
        let fetcher = state.fetcher().ok_or(CommandError::Unavailable("install"))?;

        tracing::info!(target: "osprey.exec", url, fetcher = fetcher.name(), "installing");
        match fetcher.fetch_text(url).await {
            Ok(text) => {
                state.fs.write(name, text);
                Ok(format!("Loaded {name}"))
            }
            Err(e) => {
                tracing::warn!(target: "osprey.exec", url, error = %e, "install failed");
                Ok(format!("Install error: {e}"))
            }
        }
    }
}

pub fn table() -> CommandTable {
    CommandTable::new("exec")
        .command("ls", |state, _| Ok(state.fs.list().join("\n")))
        .command("cat", |state, args| {
            let path = path_arg(args, "cat <path>")?;
            let text = state.fs.read(path).filter(|t| !t.is_empty());
            Ok(text.unwrap_or("File not found.").to_string())
        })
        .command("write", |state, args| {
            let path = path_arg(args, "write <path> <text...>")?;
            state.fs.write(path, args[1..].join(" "));
            Ok("Written.".to_string())
        })
        .command("rm", |state, args| {
            let path = path_arg(args, "rm <path>")?;
            state.fs.remove(path);
            Ok("Removed.".to_string())
        })
        .command("mkdir", |state, args| {
            let path = path_arg(args, "mkdir <path>")?;
            state.fs.mkdir(path);
            Ok("Directory created.".to_string())
        })
        .handler("install", Install)
}
