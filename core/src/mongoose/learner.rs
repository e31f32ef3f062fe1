use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Recent commands kept for context analysis.
pub const CONTEXT_CAP: usize = 50;

const DEFAULT_LEARNING_RATE: f64 = 0.1;
const BOOSTED_LEARNING_RATE: f64 = 0.2;

const SUCCESS_MARKERS: [&str; 4] = ["success", "✅", "complete", "done"];
const FAILURE_MARKERS: [&str; 5] = ["error", "fail", "❌", "not found", "not recognized"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Passive,
    Active,
    Learning,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Passive => "passive",
            Mode::Active => "active",
            Mode::Learning => "learning",
        };
        f.write_str(s)
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passive" => Ok(Mode::Passive),
            "active" => Ok(Mode::Active),
            "learning" => Ok(Mode::Learning),
            other => Err(format!("unknown mongoose mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub count: u64,
    #[serde(default)]
    pub hours: BTreeMap<u32, u64>,
    #[serde(default)]
    pub themes: BTreeMap<String, u64>,
    #[serde(default)]
    pub avg_success: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerMetrics {
    pub command_success: u64,
    pub command_failure: u64,
}

impl LearnerMetrics {
    pub fn success_rate(&self) -> f64 {
        let total = self.command_success + self.command_failure;
        if total == 0 {
            return 0.0;
        }
        self.command_success as f64 / total as f64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextEntry {
    pub command: String,
    pub args: Vec<String>,
    pub timestamp: i64,
    pub hour: u32,
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub command: Option<String>,
    pub confidence: f64,
    pub reasoning: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRecommendation {
    pub theme: &'static str,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextAnalysis {
    pub recent_activity: usize,
    pub diversity: usize,
    pub focus: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PatternLearner {
    pub version: &'static str,
    pub mode: Mode,
    pub operator: String,
    pub learning_rate: f64,
    context: VecDeque<ContextEntry>,
    patterns: BTreeMap<String, Pattern>,
    metrics: LearnerMetrics,
}

impl PatternLearner {
    pub fn new(mode: Mode, operator: impl Into<String>) -> Self {
        Self {
            version: "1.0",
            mode,
            operator: operator.into(),
            learning_rate: DEFAULT_LEARNING_RATE,
            context: VecDeque::with_capacity(CONTEXT_CAP),
            patterns: BTreeMap::new(),
            metrics: LearnerMetrics::default(),
        }
    }

    /// Restores persisted patterns and metrics.
    pub fn with_state(mut self, patterns: BTreeMap<String, Pattern>, metrics: LearnerMetrics) -> Self {
        self.patterns = patterns;
        self.metrics = metrics;
        self
    }

    pub fn patterns(&self) -> &BTreeMap<String, Pattern> {
        &self.patterns
    }

    pub fn metrics(&self) -> &LearnerMetrics {
        &self.metrics
    }

    pub fn context_len(&self) -> usize {
        self.context.len()
    }

    pub fn analyze_command(&mut self, entry: ContextEntry) {
        let pattern = self.patterns.entry(entry.command.clone()).or_default();
        pattern.count += 1;
        *pattern.hours.entry(entry.hour).or_insert(0) += 1;
        *pattern.themes.entry(entry.theme.clone()).or_insert(0) += 1;
        self.metrics.command_success += 1;

        if self.context.len() == CONTEXT_CAP {
            self.context.pop_front();
        }
        self.context.push_back(entry);
    }

    /// Scans rendered output for success and failure markers.
    pub fn analyze_output(&mut self, text: &str) {
        let lower = text.to_lowercase();
        if SUCCESS_MARKERS.iter().any(|m| lower.contains(m)) {
            self.record_success();
        }
        if FAILURE_MARKERS.iter().any(|m| lower.contains(m)) {
            self.record_failure();
        }
    }

    fn record_success(&mut self) {
        self.metrics.command_success += 1;
        if let Some(pattern) = self.last_pattern_mut() {
            pattern.avg_success = (pattern.avg_success + 1.0) / 2.0;
        }
    }

    fn record_failure(&mut self) {
        self.metrics.command_failure += 1;
        if let Some(pattern) = self.last_pattern_mut() {
            pattern.avg_success *= 0.9;
        }
    }

    fn last_pattern_mut(&mut self) -> Option<&mut Pattern> {
        let last = self.context.back()?.command.clone();
        self.patterns.get_mut(&last)
    }

    pub fn suggest_next_action(&self, hour: u32, theme: &str) -> Suggestion {
        let mut best: Option<&str> = None;
        let mut best_score = 0.0_f64;

        for (cmd, data) in &self.patterns {
            let mut score = data.count as f64 * 0.4;
            score += data.hours.get(&hour).copied().unwrap_or(0) as f64 * 0.3;
            score += data.themes.get(theme).copied().unwrap_or(0) as f64 * 0.3;

            if score > best_score {
                best_score = score;
                best = Some(cmd);
            }
        }

        Suggestion {
            command: best.map(str::to_string),
            confidence: (best_score / 100.0).min(1.0),
            reasoning: "Based on usage patterns",
        }
    }

    pub fn recommend_theme(hour: u32) -> ThemeRecommendation {
        if (9..17).contains(&hour) {
            ThemeRecommendation {
                theme: "electronics",
                reason: "Work hours - technical focus",
            }
        } else if (17..22).contains(&hour) {
            ThemeRecommendation {
                theme: "art",
                reason: "Evening - creative time",
            }
        } else {
            ThemeRecommendation {
                theme: "space",
                reason: "Night - exploration mode",
            }
        }
    }

    /// Token contribution: success rate scaled by how full the context window is.
    pub fn growth_delta(&self) -> u64 {
        let total = self.metrics.command_success + self.metrics.command_failure;
        if total == 0 {
            return 0;
        }
        let activity = (self.context.len() as f64 / CONTEXT_CAP as f64).min(1.0);
        (self.metrics.success_rate() * activity * 100.0).floor() as u64
    }

    pub fn analyze_context(&self) -> ContextAnalysis {
        let recent: Vec<&str> = self
            .context
            .iter()
            .rev()
            .take(10)
            .map(|c| c.command.split(':').next().unwrap_or(""))
            .collect();

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for kind in &recent {
            *counts.entry(*kind).or_insert(0) += 1;
        }

        // Ties resolve to the alphabetically first namespace.
        let focus = counts
            .iter()
            .fold(None::<(&str, usize)>, |best, (k, v)| match best {
                Some((_, bv)) if bv >= *v => best,
                _ => Some((*k, *v)),
            })
            .map(|(k, _)| k.to_string());

        ContextAnalysis {
            recent_activity: recent.len(),
            diversity: counts.len(),
            focus,
        }
    }

    /// Returns `false` if learning mode was already on.
    pub fn start_learning(&mut self) -> bool {
        if self.mode == Mode::Learning {
            return false;
        }
        self.mode = Mode::Learning;
        self.learning_rate = BOOSTED_LEARNING_RATE;
        true
    }

    pub fn reset(&mut self) {
        self.patterns.clear();
        self.context.clear();
        self.metrics = LearnerMetrics::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(cmd: &str, hour: u32, theme: &str) -> ContextEntry {
        ContextEntry {
            command: cmd.to_string(),
            args: vec![],
            timestamp: 0,
            hour,
            theme: theme.to_string(),
        }
    }

    #[test]
    fn context_is_capped() {
        let mut learner = PatternLearner::new(Mode::Passive, "test");
        for i in 0..(CONTEXT_CAP + 7) {
            learner.analyze_command(entry(&format!("cmd{i}"), 10, "art"));
        }
        assert_eq!(learner.context_len(), CONTEXT_CAP);
        assert_eq!(learner.patterns().len(), CONTEXT_CAP + 7);
    }

    #[test]
    fn suggestion_prefers_frequent_command_in_same_hour_and_theme() {
        let mut learner = PatternLearner::new(Mode::Passive, "test");
        for _ in 0..3 {
            learner.analyze_command(entry("help", 10, "art"));
        }
        learner.analyze_command(entry("ls", 10, "art"));
        learner.analyze_command(entry("ls", 10, "art"));

        let s = learner.suggest_next_action(10, "art");
        assert_eq!(s.command.as_deref(), Some("help"));
        // 3*0.4 + 3*0.3 + 3*0.3 = 3.0
        assert!((s.confidence - 0.03).abs() < 1e-9);
    }

    #[test]
    fn suggestion_is_empty_without_patterns() {
        let learner = PatternLearner::new(Mode::Passive, "test");
        let s = learner.suggest_next_action(3, "space");
        assert!(s.command.is_none());
        assert_eq!(s.confidence, 0.0);
    }

    #[test]
    fn output_markers_adjust_success_rate() {
        let mut learner = PatternLearner::new(Mode::Passive, "test");
        learner.analyze_command(entry("chem:react", 1, "chemistry"));
        learner.analyze_output("✅ Reaction complete!");
        assert_eq!(learner.metrics().command_success, 2);
        assert_eq!(learner.patterns()["chem:react"].avg_success, 0.5);

        learner.analyze_output("Command not recognized.");
        assert_eq!(learner.metrics().command_failure, 1);
        assert!((learner.patterns()["chem:react"].avg_success - 0.45).abs() < 1e-9);
    }

    #[test]
    fn growth_delta_scales_with_context_fill() {
        let mut learner = PatternLearner::new(Mode::Passive, "test");
        assert_eq!(learner.growth_delta(), 0);
        for _ in 0..25 {
            learner.analyze_command(entry("help", 1, "art"));
        }
        // all successes, half-full context
        assert_eq!(learner.growth_delta(), 50);
    }

    #[test]
    fn theme_recommendation_follows_time_of_day() {
        assert_eq!(PatternLearner::recommend_theme(9).theme, "electronics");
        assert_eq!(PatternLearner::recommend_theme(17).theme, "art");
        assert_eq!(PatternLearner::recommend_theme(23).theme, "space");
        assert_eq!(PatternLearner::recommend_theme(2).theme, "space");
    }

    #[test]
    fn context_analysis_reports_focus_namespace() {
        let mut learner = PatternLearner::new(Mode::Passive, "test");
        learner.analyze_command(entry("chem:mix", 1, "chemistry"));
        learner.analyze_command(entry("chem:ph", 1, "chemistry"));
        learner.analyze_command(entry("help", 1, "chemistry"));

        let ctx = learner.analyze_context();
        assert_eq!(ctx.recent_activity, 3);
        assert_eq!(ctx.diversity, 2);
        assert_eq!(ctx.focus.as_deref(), Some("chem"));
    }

    #[test]
    fn start_learning_is_idempotent() {
        let mut learner = PatternLearner::new(Mode::Passive, "test");
        assert!(learner.start_learning());
        assert_eq!(learner.learning_rate, 0.2);
        assert!(!learner.start_learning());
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Active".parse::<Mode>().unwrap(), Mode::Active);
        assert!("sleepy".parse::<Mode>().is_err());
    }
}
