use std::collections::BTreeMap;
use std::sync::Arc;

use crate::errors::CommandError;
use crate::state::ShellState;

use super::handler::{CommandHandler, FnHandler};

/// A named verb → handler mapping.
#[derive(Clone)]
pub struct CommandTable {
    name: String,
    handlers: BTreeMap<String, Arc<dyn CommandHandler>>,
}

impl CommandTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: BTreeMap::new(),
        }
    }

    /// Registers a synchronous handler. A later registration of the same verb replaces the earlier one.
    pub fn command<F>(self, verb: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut ShellState, &[String]) -> Result<String, CommandError> + Send + Sync + 'static,
    {
        self.handler(verb, FnHandler(f))
    }

    pub fn handler(mut self, verb: impl Into<String>, handler: impl CommandHandler + 'static) -> Self {
        self.handlers.insert(verb.into(), Arc::new(handler));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, verb: &str) -> Option<Arc<dyn CommandHandler>> {
        self.handlers.get(verb).cloned()
    }

    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandTable")
            .field("name", &self.name)
            .field("verbs", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
