use std::fmt::Write as _;

use chrono::DateTime;

use super::engine::SyncEngine;
use super::repos::LegendRepo;

const NAME_WIDTH: usize = 25;

fn by_production(engine: &SyncEngine) -> Vec<&LegendRepo> {
    let mut sorted: Vec<&LegendRepo> = engine.repos().iter().collect();
    // stable, so equal production keeps registry order
    sorted.sort_by(|a, b| b.production.production.cmp(&a.production.production));
    sorted
}

fn short_name(name: &str) -> String {
    if name.chars().count() > NAME_WIDTH {
        let head: String = name.chars().take(NAME_WIDTH - 3).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

fn sync_mark(repo: &LegendRepo) -> &'static str {
    if repo.last_sync.is_some() {
        "✅"
    } else {
        "⏳"
    }
}

pub fn format_status(engine: &SyncEngine) -> String {
    let status = engine.status();
    let total = engine.repos().len();
    let synced = engine.synced_count();
    let pct = if total == 0 {
        0.0
    } else {
        synced as f64 / total as f64 * 100.0
    };

    let mut out = String::from("🦎 Mongoose Multi-Repo Sync Status\n\n📊 Overview:\n");
    let _ = writeln!(out, "  • Repos Synced: {synced}/{total} ({pct:.1}%)");
    let _ = writeln!(out, "  • Total Production: {} units", engine.aggregated_production());
    let _ = writeln!(out, "  • Sync Active: {}", if status.active { "YES" } else { "NO" });
    if let Some(at) = status.last_full_sync.and_then(DateTime::from_timestamp_millis) {
        let _ = writeln!(out, "  • Last Full Sync: {}", at.format("%Y-%m-%d %H:%M:%S UTC"));
    }

    out.push_str("\n📦 Repository Production:\n\n");
    for repo in by_production(engine) {
        let _ = writeln!(
            out,
            "{} {} {:<width$} {:>6} units",
            sync_mark(repo),
            repo.emoji,
            short_name(repo.name),
            repo.production.production,
            width = NAME_WIDTH
        );
    }

    if !status.errors.is_empty() {
        let _ = writeln!(out, "\n⚠️ Errors ({}):", status.errors.len());
        for failure in status.errors.iter().take(3) {
            let _ = writeln!(out, "  • {}: {}", failure.repo, failure.error);
        }
    }

    out.push_str("\n💡 Mongoose reads and aggregates production from all legend repos.");
    out
}

pub fn format_repos(engine: &SyncEngine) -> String {
    let mut out = format!("🦎 Legend Repos in {}:\n\n", engine.owner());
    for repo in engine.repos() {
        let _ = writeln!(out, "{} {} {}", sync_mark(repo), repo.emoji, repo.name);
        let _ = writeln!(out, "   {}", repo.description);
        if let Some(label) = repo.authority_label() {
            let _ = writeln!(out, "   Authority: {label}");
        }
        out.push('\n');
    }
    out
}

/// Only repos with non-zero production are listed.
pub fn format_production(engine: &SyncEngine) -> String {
    let mut out = String::from("🦎 Aggregated Production Report\n\n");
    let _ = writeln!(out, "💎 Total Production: {} units\n", engine.aggregated_production());
    out.push_str("📦 By Repository:\n\n");
    for repo in by_production(engine) {
        if repo.production.production > 0 {
            let _ = writeln!(out, "{} {}: {} units", repo.emoji, repo.name, repo.production.production);
        }
    }
    out.push_str("\n💡 Production contributes to token valuation.");
    out
}
