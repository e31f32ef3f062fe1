use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const THEMES: [&str; 11] = [
    "mario",
    "electronics",
    "chemistry",
    "robotics",
    "quantum",
    "sports",
    "music",
    "space",
    "nature",
    "art",
    "gaming",
];

pub const DEFAULT_THEME: &str = "electronics";

/// Entries kept per theme; older commands are dropped first.
const HISTORY_CAP: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub command: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone)]
pub struct ThemeEngine {
    current: String,
    history: BTreeMap<String, Vec<HistoryEntry>>,
}

impl ThemeEngine {
    /// Starts on `initial`, or on the default theme if `initial` is unknown.
    pub fn new(initial: &str) -> Self {
        let current = if is_theme(initial) {
            initial.to_string()
        } else {
            tracing::warn!(target: "osprey.theme", theme = initial, "theme not found, using default");
            DEFAULT_THEME.to_string()
        };
        Self {
            current,
            history: BTreeMap::new(),
        }
    }

    pub fn with_history(mut self, history: BTreeMap<String, Vec<HistoryEntry>>) -> Self {
        self.history = history;
        self
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Switches theme; returns `false` and leaves the theme alone if `name` is unknown.
    pub fn load(&mut self, name: &str) -> bool {
        if !is_theme(name) {
            tracing::warn!(target: "osprey.theme", theme = name, "theme not found");
            return false;
        }
        tracing::info!(target: "osprey.theme", from = %self.current, to = name, "theme switched");
        self.current = name.to_string();
        true
    }

    pub fn next(&mut self) -> &str {
        let idx = self.index();
        let next = THEMES[(idx + 1) % THEMES.len()];
        self.load(next);
        &self.current
    }

    pub fn prev(&mut self) -> &str {
        let idx = self.index();
        let prev = THEMES[(idx + THEMES.len() - 1) % THEMES.len()];
        self.load(prev);
        &self.current
    }

    pub fn prompt(&self) -> String {
        format!("{} ", prompt_icon(&self.current))
    }

    pub fn save_to_history(&mut self, command: &str, timestamp: i64) {
        let entries = self.history.entry(self.current.clone()).or_default();
        entries.push(HistoryEntry {
            command: command.to_string(),
            timestamp,
        });
        if entries.len() > HISTORY_CAP {
            let excess = entries.len() - HISTORY_CAP;
            entries.drain(..excess);
        }
    }

    pub fn history(&self, theme: &str) -> &[HistoryEntry] {
        self.history.get(theme).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn all_history(&self) -> &BTreeMap<String, Vec<HistoryEntry>> {
        &self.history
    }

    pub fn list(&self) -> String {
        let lines: Vec<String> = THEMES
            .iter()
            .map(|t| {
                if *t == self.current {
                    format!("→ {t}")
                } else {
                    format!("  {t}")
                }
            })
            .collect();
        format!("Available themes:\n{}", lines.join("\n"))
    }

    fn index(&self) -> usize {
        THEMES
            .iter()
            .position(|t| *t == self.current)
            .unwrap_or(0)
    }
}

pub fn is_theme(name: &str) -> bool {
    THEMES.contains(&name)
}

pub fn prompt_icon(theme: &str) -> &'static str {
    match theme {
        "mario" => "🍄",
        "electronics" => "⚡",
        "chemistry" => "🧪",
        "robotics" => "🤖",
        "quantum" => "⚛️",
        "sports" => "⚽",
        "music" => "🎵",
        "space" => "🚀",
        "nature" => "🌿",
        "art" => "🎨",
        "gaming" => "🎮",
        _ => ">",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_initial_theme_falls_back_to_default() {
        let engine = ThemeEngine::new("disco");
        assert_eq!(engine.current(), DEFAULT_THEME);
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let mut engine = ThemeEngine::new("gaming");
        assert_eq!(engine.next(), "mario");
        assert_eq!(engine.prev(), "gaming");

        let mut engine = ThemeEngine::new("mario");
        assert_eq!(engine.prev(), "gaming");
    }

    #[test]
    fn load_rejects_unknown_theme() {
        let mut engine = ThemeEngine::new("space");
        assert!(!engine.load("disco"));
        assert_eq!(engine.current(), "space");
    }

    #[test]
    fn history_is_kept_per_theme() {
        let mut engine = ThemeEngine::new("mario");
        engine.save_to_history("mario:jump", 1);
        engine.load("art");
        engine.save_to_history("help", 2);

        assert_eq!(engine.history("mario").len(), 1);
        assert_eq!(engine.history("art")[0].command, "help");
        assert!(engine.history("space").is_empty());
    }

    #[test]
    fn list_marks_current_theme() {
        let engine = ThemeEngine::new("chemistry");
        let list = engine.list();
        assert!(list.contains("→ chemistry"));
        assert!(list.contains("  mario"));
    }
}
