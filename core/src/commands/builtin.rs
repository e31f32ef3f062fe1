use std::fmt::Write as _;

use crate::router::CommandTable;

/// Shown most-recent last.
const HISTORY_SHOWN: usize = 20;

pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub const HELP: &str = "Available commands:

  help                 this list
  clear                clear the screen
  about                system info
  history              commands run under the current theme
  stats                session counters
  save                 write session state to the store

  theme [name]         show or switch theme (theme:next, theme:prev, theme:list)
  elec:*               electronics bench (signal, scope, build, voltage, current)
  chem:*               chemistry lab (mix, balance, react, ph, formula)
  robot:*              robotics (program, auto, sensors, move, status)
  mario:*              mario (jump, power-up, coin, show, hide)
  token:*              tokens (apply, combine, link, value, status, valuation, emit, report)
  formula:apply <key>  apply a token formula
  mongoose:help        pattern learner and repo sync commands
  ls, cat, write, rm, mkdir, install <url>
                       virtual filesystem

  exit                 leave the terminal";

pub fn table() -> CommandTable {
    CommandTable::new("builtin")
        .command("help", |_, _| Ok(HELP.to_string()))
        .command("clear", |_, _| Ok(CLEAR_SCREEN.to_string()))
        .command("about", |_, _| {
            Ok(format!(
                "Infinity Shell: Osprey Terminal v{}\nSelf-writing architecture enabled.\nQuantum-ready. PewPi-ready.",
                env!("CARGO_PKG_VERSION")
            ))
        })
        .command("history", |state, _| {
            let theme = state.theme.current();
            let entries = state.theme.history(theme);
            if entries.is_empty() {
                return Ok(format!("No history for theme '{theme}'."));
            }
            let skip = entries.len().saturating_sub(HISTORY_SHOWN);
            let mut out = format!("History ({theme}):\n");
            for (i, entry) in entries.iter().enumerate().skip(skip) {
                let _ = writeln!(out, "{:>4}  {}", i + 1, entry.command);
            }
            Ok(out.trim_end().to_string())
        })
        .command("stats", |state, _| {
            let c = state.counters;
            Ok(format!(
                "📊 Session Stats\n  • Commands run: {}\n  • Succeeded: {}\n  • Failed: {}\n  • Session: {}\n  • Uptime: {}s",
                c.commands_run,
                c.successes,
                c.failures,
                state.session_id(),
                state.elapsed_secs()
            ))
        })
        .command("save", |state, _| {
            state.persist()?;
            Ok(format!("💾 Session saved to {}.", state.store().name()))
        })
}
