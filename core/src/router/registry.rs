use std::sync::Arc;

use super::handler::CommandHandler;
use super::table::CommandTable;

/// Tables in lookup order. Earlier tables shadow later ones.
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: Vec<CommandTable>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, table: CommandTable) -> Self {
        self.push(table);
        self
    }

    pub fn push(&mut self, table: CommandTable) {
        tracing::trace!(target: "osprey.router", table = table.name(), verbs = table.len(), "table registered");
        self.tables.push(table);
    }

    /// First table that knows `verb`, with its handler.
    pub fn resolve(&self, verb: &str) -> Option<(&str, Arc<dyn CommandHandler>)> {
        self.tables
            .iter()
            .find_map(|t| t.get(verb).map(|h| (t.name(), h)))
    }

    pub fn tables(&self) -> &[CommandTable] {
        &self.tables
    }

    /// Every verb any table answers to, deduplicated, in lookup order.
    pub fn verbs(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.tables
            .iter()
            .flat_map(CommandTable::verbs)
            .filter(|v| seen.insert(*v))
            .collect()
    }
}
