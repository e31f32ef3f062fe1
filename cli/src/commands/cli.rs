use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "osprey", version, about = "Osprey novelty terminal")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file. Defaults to `osprey.toml` in the working directory, if present.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Directory for persisted session state (switches to the file store).
    #[arg(long, global = true)]
    pub store_dir: Option<String>,

    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Disable repository sync and `install`.
    #[arg(long, default_value_t = false, global = true)]
    pub offline: bool,

    /// Print mascot lines to stderr after commands.
    #[arg(long, default_value_t = false, global = true)]
    pub mascots: bool,

    /// Seed for the novelty readouts, for reproducible sessions.
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive session (the default).
    Repl,
    /// Run one line, or a script from stdin with `-`.
    Exec(ExecArgs),
    /// Sync the legend repos once and print the status report.
    Sync,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ExecArgs {
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub line: Vec<String>,
}

impl ExecArgs {
    pub fn reads_stdin(&self) -> bool {
        matches!(self.line.as_slice(), [only] if only == "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_repl() {
        let args = Args::parse_from(["osprey", "--offline"]);
        assert!(args.command.is_none());
        assert!(args.offline);
        assert!(!args.mascots);
    }

    #[test]
    fn exec_keeps_words_and_hyphens() {
        let args = Args::parse_from(["osprey", "exec", "write", "a.txt", "-x", "y"]);
        let Some(Commands::Exec(exec)) = args.command else {
            panic!("expected exec");
        };
        assert_eq!(exec.line, vec!["write", "a.txt", "-x", "y"]);
        assert!(!exec.reads_stdin());
    }

    #[test]
    fn exec_dash_reads_stdin() {
        let args = Args::parse_from(["osprey", "--seed", "7", "exec", "-"]);
        assert_eq!(args.seed, Some(7));
        let Some(Commands::Exec(exec)) = args.command else {
            panic!("expected exec");
        };
        assert!(exec.reads_stdin());
    }

    #[test]
    fn exec_requires_a_line() {
        assert!(Args::try_parse_from(["osprey", "exec"]).is_err());
    }
}
