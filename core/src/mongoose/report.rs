use std::fmt::Write as _;

use super::learner::{PatternLearner, CONTEXT_CAP};

pub fn format_report(learner: &PatternLearner, hour: u32, theme: &str) -> String {
    let suggestion = learner.suggest_next_action(hour, theme);
    let theme_rec = PatternLearner::recommend_theme(hour);
    let context = learner.analyze_context();
    let metrics = learner.metrics();

    let mut out = String::from("🦎 Mongoose.OS AI Reasoning Report\n\n");
    let _ = writeln!(out, "📊 Firmware Version: {}", learner.version);
    let _ = writeln!(out, "🔧 Mode: {}", learner.mode.to_string().to_uppercase());
    let _ = writeln!(out, "👤 Operator: {}\n", learner.operator);

    out.push_str("🧠 AI Analysis:\n");
    let _ = writeln!(out, "  • Patterns Detected: {}", learner.patterns().len());
    let _ = writeln!(out, "  • Recent Activity: {} commands", context.recent_activity);
    let _ = writeln!(out, "  • Activity Diversity: {} types", context.diversity);
    let _ = writeln!(
        out,
        "  • Current Focus: {}\n",
        context.focus.as_deref().unwrap_or("none")
    );

    out.push_str("💡 AI Suggestions:\n");
    match &suggestion.command {
        Some(cmd) => {
            let _ = writeln!(out, "  • Next Command: {cmd}");
            let _ = writeln!(out, "  • Confidence: {:.1}%", suggestion.confidence * 100.0);
            let _ = writeln!(out, "  • Reasoning: {}", suggestion.reasoning);
        }
        None => out.push_str("  • Building pattern data...\n"),
    }
    out.push('\n');

    out.push_str("🎨 Theme Recommendation:\n");
    let _ = writeln!(out, "  • Suggested: {}", theme_rec.theme);
    let _ = writeln!(out, "  • Reason: {}\n", theme_rec.reason);

    out.push_str("📈 Performance Metrics:\n");
    let _ = writeln!(out, "  • Successful Commands: {}", metrics.command_success);
    let _ = writeln!(out, "  • Failed Commands: {}", metrics.command_failure);
    let _ = writeln!(out, "  • Success Rate: {:.1}%\n", metrics.success_rate() * 100.0);

    let _ = write!(out, "🔢 Growth Delta: +{} tokens", learner.growth_delta());
    out
}

/// Top ten verbs by count.
pub fn format_patterns(learner: &PatternLearner) -> String {
    if learner.patterns().is_empty() {
        return "🦎 No patterns detected yet.\n\nStart using commands to train the AI.".to_string();
    }

    let mut sorted: Vec<_> = learner.patterns().iter().collect();
    sorted.sort_by(|(_, a), (_, b)| b.count.cmp(&a.count));

    let mut out = String::from("🦎 Detected Usage Patterns:\n\n");
    out.push_str("Command                    Count   Success\n");
    let _ = writeln!(out, "{}", "─".repeat(45));
    for (cmd, data) in sorted.into_iter().take(10) {
        let _ = writeln!(
            out,
            "{:<25} {:>5}   {:.0}%",
            cmd,
            data.count,
            data.avg_success * 100.0
        );
    }
    out
}

pub fn format_metrics(learner: &PatternLearner) -> String {
    let m = learner.metrics();
    format!(
        "🦎 Mongoose Metrics:

📊 Command Statistics:
  • Successful: {}
  • Failed: {}
  • Success Rate: {:.1}%

🧠 AI Learning:
  • Patterns Detected: {}
  • Context Buffer: {}/{}
  • Learning Rate: {}

🔢 Token Contribution:
  • Growth Delta: +{} tokens
  • Mode: {}",
        m.command_success,
        m.command_failure,
        m.success_rate() * 100.0,
        learner.patterns().len(),
        learner.context_len(),
        CONTEXT_CAP,
        learner.learning_rate,
        learner.growth_delta(),
        learner.mode
    )
}
