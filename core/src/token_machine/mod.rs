//! Token emission machine: fixed actions and formulas that mint synthetic tokens.

use std::fmt::Write as _;

use chrono::DateTime;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formula {
    pub key: &'static str,
    pub formula: &'static str,
    pub name: &'static str,
    pub power: u32,
}

pub const ACTIONS: [Action; 8] = [
    Action { name: "synch", icon: "🎵", description: "synch → decide" },
    Action { name: "read", icon: "🟨", description: "read → ingest" },
    Action { name: "write", icon: "🟦", description: "write → persist" },
    Action { name: "thread", icon: "🧵", description: "thread → relate" },
    Action { name: "organize", icon: "🗄️", description: "organize → structure" },
    Action { name: "assemble", icon: "🪡", description: "assemble → construct" },
    Action { name: "modulate", icon: "🎛️", description: "modulate → optimize" },
    Action { name: "run", icon: "🦿", description: "run → execute" },
];

pub const FORMULAS: [Formula; 9] = [
    Formula { key: "crown-signal-white", formula: "👑📶⚪", name: "Authority Signal", power: 100 },
    Formula { key: "diamond-crown-mushroom", formula: "💎👑🍄", name: "Growth Authority", power: 150 },
    Formula { key: "white-crown-link", formula: "⚪👑🔗", name: "Connected Authority", power: 120 },
    Formula { key: "file-thread-signal", formula: "🗄️🧵📶", name: "Organized Communication", power: 90 },
    Formula { key: "diamond-modulator-crown", formula: "💎🎛️👑", name: "Optimized Authority", power: 180 },
    Formula { key: "white-money-sync", formula: "⚪💰🎵", name: "Synchronized Value", power: 200 },
    Formula { key: "link-pin-joystick-disk", formula: "🖇️📍🕹️📀", name: "Interactive Archive", power: 160 },
    Formula { key: "assembler-nerd-star", formula: "🪡🤓⭐", name: "Smart Construction", power: 140 },
    Formula { key: "crown-magnet-planet", formula: "👑🧲🪐", name: "Gravitational Authority", power: 250 },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TokenKind {
    Action {
        action: String,
        icon: String,
        description: String,
    },
    Formula {
        formula: String,
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmittedToken {
    pub id: String,
    #[serde(flatten)]
    pub kind: TokenKind,
    pub power: u32,
    pub timestamp: i64,
    #[serde(rename = "emittedBy")]
    pub emitted_by: String,
}

impl EmittedToken {
    pub fn is_formula(&self) -> bool {
        matches!(self.kind, TokenKind::Formula { .. })
    }
}

pub fn find_action(name: &str) -> Option<&'static Action> {
    ACTIONS.iter().find(|a| a.name == name)
}

/// Looks a formula up by key or by its emoji string.
pub fn find_formula(key: &str) -> Option<&'static Formula> {
    FORMULAS.iter().find(|f| f.key == key || f.formula == key)
}

#[derive(Debug, Clone, Default)]
pub struct TokenMachine {
    emitted: Vec<EmittedToken>,
}

impl TokenMachine {
    pub fn new(emitted: Vec<EmittedToken>) -> Self {
        Self { emitted }
    }

    pub fn emitted(&self) -> &[EmittedToken] {
        &self.emitted
    }

    /// Mints an action token with a random power in 50..100.
    pub fn emit<R: Rng + ?Sized>(&mut self, action: &str, rng: &mut R, now_ms: i64) -> Option<&EmittedToken> {
        let action = find_action(action)?;
        let token = EmittedToken {
            id: format!("TKN-{}-{now_ms}", action.name.to_uppercase()),
            kind: TokenKind::Action {
                action: action.name.to_string(),
                icon: action.icon.to_string(),
                description: action.description.to_string(),
            },
            power: rng.gen_range(50..100),
            timestamp: now_ms,
            emitted_by: "Mongoose Machine".to_string(),
        };
        tracing::debug!(target: "osprey.token", id = %token.id, power = token.power, "token emitted");
        self.emitted.push(token);
        self.emitted.last()
    }

    pub fn apply_formula(&mut self, key: &str, now_ms: i64) -> Option<&EmittedToken> {
        let formula = find_formula(key)?;
        let token = EmittedToken {
            id: format!("FORMULA-{}-{now_ms}", formula.key.to_uppercase()),
            kind: TokenKind::Formula {
                formula: formula.formula.to_string(),
                name: formula.name.to_string(),
            },
            power: formula.power,
            timestamp: now_ms,
            emitted_by: "Kris Formula System".to_string(),
        };
        tracing::debug!(target: "osprey.token", id = %token.id, "formula applied");
        self.emitted.push(token);
        self.emitted.last()
    }

    pub fn total_power(&self) -> u64 {
        self.emitted.iter().map(|t| u64::from(t.power)).sum()
    }

    pub fn report(&self) -> String {
        let formula_tokens = self.emitted.iter().filter(|t| t.is_formula()).count();
        let total = self.emitted.len();

        let mut out = String::from("🧱 Token Machine Emission Report\n\n📊 Statistics:\n");
        let _ = writeln!(out, "  • Total Tokens Emitted: {total}");
        let _ = writeln!(out, "  • Action Tokens: {}", total - formula_tokens);
        let _ = writeln!(out, "  • Formula Tokens: {formula_tokens}");
        let _ = writeln!(out, "  • Total Power: {}", self.total_power());
        if let Some(at) = self
            .emitted
            .last()
            .and_then(|t| DateTime::from_timestamp_millis(t.timestamp))
        {
            let _ = writeln!(out, "  • Last Emission: {}", at.format("%Y-%m-%d %H:%M:%S UTC"));
        }

        out.push_str("\n🎯 Available Actions:\n");
        for action in &ACTIONS {
            let _ = writeln!(out, "  {} {} : {}", action.icon, action.name, action.description);
        }
        let _ = writeln!(out, "\n🧱 Kris Formulas ({} total):", FORMULAS.len());
        for formula in &FORMULAS {
            let _ = writeln!(out, "  {} → {} ({} power)", formula.formula, formula.name, formula.power);
        }
        out.push_str("\n💡 Use 'token:emit <action>' or 'formula:apply <key>' to emit tokens.");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn emit_known_action_has_power_in_range() {
        let mut machine = TokenMachine::default();
        let mut rng = StdRng::seed_from_u64(7);
        let token = machine.emit("thread", &mut rng, 1234).unwrap().clone();
        assert_eq!(token.id, "TKN-THREAD-1234");
        assert!((50..100).contains(&token.power));
        assert!(!token.is_formula());
        assert!(machine.emit("dance", &mut rng, 1).is_none());
        assert_eq!(machine.emitted().len(), 1);
    }

    #[test]
    fn formula_by_key_or_emoji() {
        let mut machine = TokenMachine::default();
        let token = machine.apply_formula("crown-magnet-planet", 9).unwrap();
        assert_eq!(token.id, "FORMULA-CROWN-MAGNET-PLANET-9");
        assert_eq!(token.power, 250);
        assert!(machine.apply_formula("👑📶⚪", 10).is_some());
        assert!(machine.apply_formula("nope", 11).is_none());
        assert_eq!(machine.total_power(), 350);
    }

    #[test]
    fn report_splits_action_and_formula_tokens() {
        let mut machine = TokenMachine::default();
        let mut rng = StdRng::seed_from_u64(1);
        machine.emit("run", &mut rng, 1);
        machine.apply_formula("white-money-sync", 2);
        let report = machine.report();
        assert!(report.contains("Total Tokens Emitted: 2"));
        assert!(report.contains("Action Tokens: 1"));
        assert!(report.contains("Formula Tokens: 1"));
        assert!(report.contains("Kris Formulas (9 total)"));
    }

    #[test]
    fn emissions_serialize_with_type_tag() {
        let mut machine = TokenMachine::default();
        machine.apply_formula("white-crown-link", 3);
        let json = serde_json::to_string(machine.emitted()).unwrap();
        assert!(json.contains(r#""type":"formula""#));
        let back: Vec<EmittedToken> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, machine.emitted());
    }
}
