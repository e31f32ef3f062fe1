use async_trait::async_trait;

use crate::state::ShellState;

const MAX_SUGGESTIONS: usize = 5;

/// Free-text interpreter consulted when no table knows the verb.
#[async_trait]
pub trait Fallback: Send + Sync {
    /// `None` means the line was not understood.
    async fn interpret(&self, state: &ShellState, line: &str, known_verbs: &[&str]) -> Option<String>;
}

/// Rogers, the terminal's helper. Offers near-miss verbs and answers questions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RogersFallback;

#[async_trait]
impl Fallback for RogersFallback {
    async fn interpret(&self, state: &ShellState, line: &str, known_verbs: &[&str]) -> Option<String> {
        let line = line.trim();

        if line.ends_with('?') {
            let hour = state.local_hour();
            let suggestion = state.learner.suggest_next_action(hour, state.theme.current());
            return Some(match suggestion.command {
                Some(cmd) => format!("Rogers: try '{cmd}'. It fits what you usually do around now."),
                None => "Rogers: I don't know yet. Type 'help' to see what I can do.".to_string(),
            });
        }

        let verb = line.split_whitespace().next()?;
        let (namespace, _) = verb.split_once(':')?;
        let prefix = format!("{namespace}:");
        let matches: Vec<&str> = known_verbs
            .iter()
            .copied()
            .filter(|v| v.starts_with(&prefix))
            .take(MAX_SUGGESTIONS)
            .collect();
        if matches.is_empty() {
            return None;
        }
        Some(format!("Rogers: did you mean {}?", matches.join(", ")))
    }
}
