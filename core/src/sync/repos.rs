use serde::{Deserialize, Serialize};

use super::r#trait::RepoInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authority {
    /// Only the file count is read; failures keep the cached data.
    ReadOnly,
    /// The terminal itself; never fetched.
    Local,
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionData {
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub forks: u64,
    #[serde(default)]
    pub file_count: u64,
    #[serde(default)]
    pub production: u64,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub authority: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendRepo {
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub authority: Authority,
    pub last_sync: Option<i64>,
    pub production: ProductionData,
}

impl LegendRepo {
    fn new(name: &'static str, emoji: &'static str, description: &'static str, authority: Authority) -> Self {
        Self {
            name,
            emoji,
            description,
            authority,
            last_sync: None,
            production: ProductionData::default(),
        }
    }

    pub fn authority_label(&self) -> Option<&'static str> {
        match self.authority {
            Authority::ReadOnly => Some("read-only"),
            Authority::Local => Some("local"),
            Authority::None => None,
        }
    }
}

/// The legend repositories, in display order. The local terminal starts synced.
pub fn default_repos(now_ms: i64) -> Vec<LegendRepo> {
    let mut local = LegendRepo::new("Osprey-Terminal", "🦅", "Current terminal", Authority::Local);
    local.last_sync = Some(now_ms);

    vec![
        LegendRepo::new("legend-core", "👑🧱🇯🇵", "Core authority repo", Authority::ReadOnly),
        LegendRepo::new("legend-🦾-robot-core", "🦾", "Robot core systems", Authority::None),
        LegendRepo::new("legend-🪐-memory", "🪐", "Memory storage", Authority::None),
        LegendRepo::new("legend-⭐-runtime", "⭐", "Runtime execution", Authority::None),
        LegendRepo::new("legend-🕹️-mario-exit", "🕹️", "Mario exit interface", Authority::None),
        LegendRepo::new("legend-🧱-encode", "🧱", "Token encoding", Authority::None),
        LegendRepo::new("legend-👁️-token-viewer", "👁️‍🗨️", "Token viewer", Authority::None),
        LegendRepo::new("legend-🎵-sync", "🎵", "Synchronization core", Authority::None),
        LegendRepo::new("legend-🪡-assembler", "🪡", "Code assembler", Authority::None),
        LegendRepo::new("legend-🔀-flow", "🔀", "Flow control", Authority::None),
        LegendRepo::new("legend-🔗-semantic", "🔗", "Semantic linking", Authority::None),
        LegendRepo::new("legend-🍄-auditor", "🍄", "Audit system", Authority::None),
        LegendRepo::new("legend-🎛️-modulator", "🎛️", "Signal modulator", Authority::None),
        LegendRepo::new("legend-💫-star", "💫", "Star system", Authority::None),
        LegendRepo::new("legend-✨-multistar", "✨", "Multi-star system", Authority::None),
        LegendRepo::new("legend-⛓️-chain", "⛓️", "Blockchain", Authority::None),
        LegendRepo::new("legend-spine-index", "👑🔀🎛️", "Spine index aggregator", Authority::None),
        local,
    ]
}

/// size/10 + 10 per star + 20 per fork + 5 per file, floored.
pub fn calculate_production(info: &RepoInfo, file_count: usize) -> u64 {
    let production = info.size as f64 / 10.0
        + info.stargazers_count as f64 * 10.0
        + info.forks_count as f64 * 20.0
        + file_count as f64 * 5.0;
    production.floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_formula() {
        let info = RepoInfo {
            size: 125,
            stargazers_count: 2,
            forks_count: 1,
        };
        // 12.5 + 20 + 20 + 15
        assert_eq!(calculate_production(&info, 3), 67);
        assert_eq!(calculate_production(&RepoInfo::default(), 0), 0);
    }

    #[test]
    fn registry_has_one_authority_and_one_local_repo() {
        let repos = default_repos(42);
        assert_eq!(repos.len(), 18);
        assert_eq!(repos.iter().filter(|r| r.authority == Authority::ReadOnly).count(), 1);
        let local: Vec<_> = repos.iter().filter(|r| r.authority == Authority::Local).collect();
        assert_eq!(local.len(), 1);
        assert_eq!(local[0].last_sync, Some(42));
    }
}
