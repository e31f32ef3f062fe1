//! Mongoose: a command frequency counter dressed up as a reasoning engine.

mod learner;
mod report;

pub use learner::{
    ContextAnalysis, ContextEntry, LearnerMetrics, Mode, Pattern, PatternLearner, Suggestion,
    ThemeRecommendation, CONTEXT_CAP,
};
pub use report::{format_metrics, format_patterns, format_report};
