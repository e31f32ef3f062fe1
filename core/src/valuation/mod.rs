//! Synthetic token valuation over session activity counters.
//!
//! TKN are not money. The numbers only reflect how much the terminal has
//! been used.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const BASE_VALUE: u64 = 10;
pub const GROWTH_MULTIPLIER: f64 = 1.0;

fn default_files() -> u64 {
    11
}

fn default_commits() -> u64 {
    5
}

/// Persisted activity counters. Missing fields fall back to their defaults
/// so older saves keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityMetrics {
    #[serde(default)]
    pub page_views: u64,
    #[serde(default)]
    pub commands_executed: u64,
    #[serde(default)]
    pub theme_switches: u64,
    #[serde(default)]
    pub characters_spawned: u64,
    #[serde(default, rename = "timeOnPage")]
    pub time_on_page_secs: u64,
    #[serde(default)]
    pub unique_sessions: u64,
    #[serde(default = "default_files")]
    pub files_in_repo: u64,
    #[serde(default)]
    pub code_lines: u64,
    #[serde(default = "default_commits")]
    pub commits: u64,
}

impl Default for ActivityMetrics {
    fn default() -> Self {
        Self {
            page_views: 0,
            commands_executed: 0,
            theme_switches: 0,
            characters_spawned: 0,
            time_on_page_secs: 0,
            unique_sessions: 0,
            files_in_repo: default_files(),
            code_lines: 0,
            commits: default_commits(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownLine {
    pub label: &'static str,
    pub tokens: f64,
}

#[derive(Debug, Clone, Default)]
pub struct TokenValuation {
    metrics: ActivityMetrics,
}

impl TokenValuation {
    pub fn new(metrics: ActivityMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &ActivityMetrics {
        &self.metrics
    }

    /// Counts a new session: one page view and one unique session.
    pub fn start_session(&mut self) {
        self.metrics.page_views += 1;
        self.metrics.unique_sessions += 1;
    }

    pub fn record_command(&mut self) {
        self.metrics.commands_executed += 1;
    }

    pub fn record_theme_switch(&mut self) {
        self.metrics.theme_switches += 1;
    }

    pub fn record_character_spawn(&mut self) {
        self.metrics.characters_spawned += 1;
    }

    /// Sets the active time of the current session.
    pub fn touch(&mut self, elapsed_secs: u64) {
        self.metrics.time_on_page_secs = elapsed_secs;
    }

    pub fn breakdown(&self, growth_delta: u64) -> Vec<BreakdownLine> {
        let m = &self.metrics;
        let line = |label, tokens| BreakdownLine { label, tokens };
        vec![
            line("Page Views", m.page_views as f64 * 0.5),
            line("Commands Executed", (m.commands_executed * 2) as f64),
            line("Theme Switches", (m.theme_switches * 5) as f64),
            line("Characters Spawned", (m.characters_spawned * 3) as f64),
            line("Minutes Active", (m.time_on_page_secs / 60) as f64),
            line("Unique Sessions", (m.unique_sessions * 10) as f64),
            line("Repository Files", (m.files_in_repo * 2) as f64),
            line("Code Lines (per 100)", ((m.code_lines / 100) * 5) as f64),
            line("Commits", (m.commits * 15) as f64),
            line("Mongoose AI Growth", growth_delta as f64),
        ]
    }

    /// Total value in TKN for the given learner growth delta.
    pub fn calculate(&self, growth_delta: u64) -> u64 {
        let sum: f64 = self.breakdown(growth_delta).iter().map(|l| l.tokens).sum();
        (BASE_VALUE as f64 + sum * GROWTH_MULTIPLIER).floor() as u64
    }

    /// Commands per active minute.
    pub fn growth_rate(&self) -> f64 {
        let minutes = self.metrics.time_on_page_secs as f64 / 60.0;
        if minutes > 0.0 {
            self.metrics.commands_executed as f64 / minutes
        } else {
            0.0
        }
    }

    pub fn report(&self, growth_delta: u64, now: DateTime<Utc>) -> String {
        let m = &self.metrics;
        let mut out = String::from("🧱 Token Valuation (Real-time Metrics)\n\n");
        let _ = writeln!(out, "💎 Total Token Value: {} TKN", self.calculate(growth_delta));
        let _ = writeln!(out, "📊 Base Value: {BASE_VALUE} TKN");
        let _ = writeln!(out, "📈 Growth Multiplier: {GROWTH_MULTIPLIER}x");
        let _ = writeln!(out, "⚡ Growth Rate: {:.2} TKN/min\n", self.growth_rate());

        out.push_str("📋 Token Breakdown:\n");
        for line in self.breakdown(growth_delta).iter().filter(|l| l.tokens > 0.0) {
            let _ = writeln!(out, "  • {}: {:.1} TKN", line.label, line.tokens);
        }

        out.push_str("\n🔢 Activity Metrics:\n");
        let _ = writeln!(out, "  • Page Views: {}", m.page_views);
        let _ = writeln!(out, "  • Commands: {}", m.commands_executed);
        let _ = writeln!(out, "  • Theme Switches: {}", m.theme_switches);
        let _ = writeln!(out, "  • Characters: {}", m.characters_spawned);
        let _ = writeln!(out, "  • Time Active: {} minutes", m.time_on_page_secs / 60);
        let _ = writeln!(out, "  • Sessions: {}", m.unique_sessions);

        out.push_str("\n📍 Repository Metrics:\n");
        let _ = writeln!(out, "  • Files: {}", m.files_in_repo);
        let _ = writeln!(out, "  • Commits: {}", m.commits);
        let _ = writeln!(out, "  • Code Lines: {}", m.code_lines);

        let _ = writeln!(out, "\n⏰ Last Update: {}", now.format("%Y-%m-%d %H:%M:%S UTC"));
        out.push_str("\n💡 Note: Token values (TKN) are not USD. They represent\n");
        out.push_str("   real activity and growth metrics in the terminal.\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_metrics_value_is_base_plus_repo_constants() {
        let valuation = TokenValuation::default();
        // 10 + 11*2 + 5*15
        assert_eq!(valuation.calculate(0), 107);
    }

    #[test]
    fn contributions_are_summed_and_floored() {
        let mut valuation = TokenValuation::new(ActivityMetrics {
            files_in_repo: 0,
            commits: 0,
            ..ActivityMetrics::default()
        });
        valuation.start_session();
        valuation.record_command();
        valuation.record_theme_switch();
        valuation.touch(119);
        // 10 + 0.5 + 2 + 5 + 1 + 10 + delta 3
        assert_eq!(valuation.calculate(3), 31);
    }

    #[test]
    fn report_skips_zero_lines_and_mentions_usd() {
        let valuation = TokenValuation::default();
        let report = valuation.report(0, Utc::now());
        assert!(report.contains("Total Token Value: 107 TKN"));
        assert!(report.contains("Repository Files: 22.0 TKN"));
        assert!(!report.contains("Page Views: 0.0"));
        assert!(report.contains("not USD"));
    }

    #[test]
    fn partial_saved_metrics_keep_defaults() {
        let metrics: ActivityMetrics = serde_json::from_str(r#"{"pageViews":4}"#).unwrap();
        assert_eq!(metrics.page_views, 4);
        assert_eq!(metrics.files_in_repo, 11);
        assert_eq!(metrics.commits, 5);
    }
}
