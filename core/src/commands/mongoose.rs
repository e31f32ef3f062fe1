use async_trait::async_trait;

use crate::errors::CommandError;
use crate::mongoose::{format_metrics, format_patterns, format_report, PatternLearner};
use crate::router::{CommandHandler, CommandTable};
use crate::state::{now_ms, ShellState};
use crate::sync::{format_production, format_repos, format_status};

/// Suggestions below this confidence are not offered by `mongoose:auto`.
const AUTO_CONFIDENCE: f64 = 0.3;

const HELP: &str = "🦎 Mongoose.OS Commands:

🔧 Core Commands:
  mongoose:status     - Full AI reasoning report
  mongoose:suggest    - Get AI command suggestion
  mongoose:theme      - Get AI theme recommendation
  mongoose:patterns   - View detected usage patterns
  mongoose:metrics    - View performance metrics

🧠 Learning Commands:
  mongoose:learn      - Activate learning mode
  mongoose:auto       - Auto-execute AI suggestion
  mongoose:reset      - Reset AI patterns

🔗 Multi-Repo Sync Commands:
  mongoose:sync       - View repo sync status
  mongoose:sync-now   - Force immediate sync
  mongoose:repos      - List all legend repos
  mongoose:production - View production aggregation

💡 The AI learns from your usage and provides
   intelligent suggestions based on patterns.";

/// `mongoose:sync-now`: runs a full sync and reports the outcome.
struct SyncNow;

#[async_trait]
impl CommandHandler for SyncNow {
    async fn call(&self, state: &mut ShellState, _args: &[String]) -> Result<String, CommandError> {
        let source = state.repo_source().ok_or(CommandError::Unavailable("repository sync"))?;
        let summary = state.sync.sync_all(source.as_ref(), now_ms()).await;
        Ok(format!(
            "🦎 Multi-repo sync finished\n\n📡 Repos synced: {}\n⚠️ Failures: {}\n💎 Production this run: {} units\n\n\
             Use 'mongoose:sync' for the full status.",
            summary.synced, summary.failed, summary.production
        ))
    }
}

fn suggest(state: &mut ShellState, _args: &[String]) -> Result<String, CommandError> {
    let suggestion = state
        .learner
        .suggest_next_action(state.local_hour(), state.theme.current());
    let Some(cmd) = suggestion.command else {
        return Ok("🦎 Building pattern data...\n\nKeep using commands to train the AI.\n\
                   Suggestions will improve with more usage."
            .to_string());
    };
    Ok(format!(
        "🦎 AI Suggestion:\n\n💡 Recommended Command: {cmd}\n📊 Confidence: {:.1}%\n🧠 Reasoning: {}\n\n\
         💭 Based on your usage patterns, this command\n   is likely what you want to run next.\n\n\
         Type the command or use 'mongoose:auto' to execute it.",
        suggestion.confidence * 100.0,
        suggestion.reasoning
    ))
}

fn recommend_theme(state: &mut ShellState, _args: &[String]) -> Result<String, CommandError> {
    let rec = PatternLearner::recommend_theme(state.local_hour());
    let current = state.theme.current();
    let tail = if current == rec.theme {
        "✅ You're already using the recommended theme!".to_string()
    } else {
        format!("Current theme is '{current}'.\nSwitch with: theme {}", rec.theme)
    };
    Ok(format!(
        "🦎 AI Theme Recommendation:\n\n🎨 Suggested Theme: {}\n💭 Reasoning: {}\n\n{tail}",
        rec.theme, rec.reason
    ))
}

fn auto(state: &mut ShellState, _args: &[String]) -> Result<String, CommandError> {
    let suggestion = state
        .learner
        .suggest_next_action(state.local_hour(), state.theme.current());
    let pct = suggestion.confidence * 100.0;
    match suggestion.command {
        Some(cmd) if suggestion.confidence > AUTO_CONFIDENCE => Ok(format!(
            "🦎 Auto-executing suggestion...\n\nCommand: {cmd}\nConfidence: {pct:.1}%\n\n\
             [Note: Auto-execution requires user confirmation]\nType '{cmd}' to run it."
        )),
        _ => Ok(format!(
            "🦎 Confidence too low for auto-execution.\n\nCurrent confidence: {pct:.1}%\nRequired: {:.0}%\n\n\
             Keep using commands to improve AI confidence.",
            AUTO_CONFIDENCE * 100.0
        )),
    }
}

pub fn table() -> CommandTable {
    CommandTable::new("mongoose")
        .command("mongoose:status", |state, _| {
            Ok(format_report(&state.learner, state.local_hour(), state.theme.current()))
        })
        .command("mongoose:suggest", suggest)
        .command("mongoose:theme", recommend_theme)
        .command("mongoose:patterns", |state, _| Ok(format_patterns(&state.learner)))
        .command("mongoose:learn", |state, _| {
            if !state.learner.start_learning() {
                return Ok("🦎 Already in learning mode.\n\nAI is actively analyzing your patterns.".to_string());
            }
            Ok("🦎 Learning Mode Activated\n\n📚 AI will actively learn from your commands\n\
                ⚡ Learning rate increased to 0.2\n🧠 Pattern detection enhanced\n\n\
                Mode will switch to 'active' after sufficient data."
                .to_string())
        })
        .command("mongoose:metrics", |state, _| Ok(format_metrics(&state.learner)))
        .command("mongoose:reset", |state, _| {
            state.reset_learner()?;
            Ok("🦎 Mongoose AI Reset Complete\n\n🧹 All patterns cleared\n🔄 Metrics reset to zero\n\
                📚 Ready to learn fresh patterns\n\nStart using commands to train the AI."
                .to_string())
        })
        .command("mongoose:auto", auto)
        .command("mongoose:help", |_, _| Ok(HELP.to_string()))
        .command("mongoose:sync", |state, _| Ok(format_status(&state.sync)))
        .handler("mongoose:sync-now", SyncNow)
        .command("mongoose:repos", |state, _| Ok(format_repos(&state.sync)))
        .command("mongoose:production", |state, _| Ok(format_production(&state.sync)))
}
