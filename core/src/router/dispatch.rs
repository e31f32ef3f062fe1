use crate::errors::StoreError;
use crate::presenter::{Presenter, PresenterEvent};
use crate::state::ShellState;

use super::fallback::Fallback;
use super::registry::TableRegistry;
use super::tokenize::tokenize;

pub const DEFAULT_FALLBACK_MESSAGE: &str = "Command not recognized.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStatus {
    /// A table handler returned normally.
    Handled,
    /// A table handler returned an error, rendered inline.
    Failed,
    /// No table matched; the free-text fallback answered.
    Fallback,
    /// Nothing understood the line.
    Unrecognized,
}

impl DispatchStatus {
    pub fn is_success(self) -> bool {
        self == DispatchStatus::Handled
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub text: String,
    /// Name of the table that answered; empty when nothing did.
    pub table: String,
    pub verb: String,
    pub status: DispatchStatus,
}

/// Owns the tables and the session state. One line in, one string out.
pub struct Router {
    registry: TableRegistry,
    state: ShellState,
    fallback: Option<Box<dyn Fallback>>,
    presenter: Option<Box<dyn Presenter>>,
    fallback_message: String,
    autosave_every: u64,
}

impl Router {
    pub fn new(registry: TableRegistry, state: ShellState) -> Self {
        Self {
            registry,
            state,
            fallback: None,
            presenter: None,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            autosave_every: 0,
        }
    }

    pub fn with_fallback(mut self, fallback: impl Fallback + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub fn with_presenter(mut self, presenter: Box<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Persist every `n` commands. Zero disables autosave.
    pub fn with_autosave(mut self, n: u64) -> Self {
        self.autosave_every = n;
        self
    }

    pub fn registry(&self) -> &TableRegistry {
        &self.registry
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    pub fn prompt(&self) -> String {
        self.state.theme.prompt()
    }

    pub fn persist(&mut self) -> Result<(), StoreError> {
        self.state.persist()
    }

    /// Resolves and runs one line. Blank input returns `None` and touches nothing.
    pub async fn dispatch(&mut self, line: &str) -> Option<Dispatch> {
        let (verb, args) = tokenize(line)?;
        let line = line.trim();
        let theme_before = self.state.theme.current().to_string();

        let (text, table, status) = match self.registry.resolve(&verb) {
            Some((table, handler)) => {
                let table = table.to_string();
                match handler.call(&mut self.state, &args).await {
                    Ok(text) => (text, table, DispatchStatus::Handled),
                    Err(e) => {
                        tracing::warn!(target: "osprey.router", %table, %verb, error = %e, "handler failed");
                        (format!("Error: {e}"), table, DispatchStatus::Failed)
                    }
                }
            }
            None => {
                let interpreted = match &self.fallback {
                    Some(fallback) => {
                        let known = self.registry.verbs();
                        fallback.interpret(&self.state, line, &known).await
                    }
                    None => None,
                };
                match interpreted {
                    Some(text) => (text, "fallback".to_string(), DispatchStatus::Fallback),
                    None => (self.fallback_message.clone(), String::new(), DispatchStatus::Unrecognized),
                }
            }
        };

        tracing::debug!(target: "osprey.router", %verb, table = %table, status = ?status, "dispatched");
        self.after_dispatch(&verb, &args, line, &text, status, &theme_before);

        Some(Dispatch {
            text,
            table,
            verb,
            status,
        })
    }

    fn after_dispatch(
        &mut self,
        verb: &str,
        args: &[String],
        line: &str,
        text: &str,
        status: DispatchStatus,
        theme_before: &str,
    ) {
        self.state
            .record_dispatch(verb, args, line, text, status.is_success());

        let theme_now = self.state.theme.current().to_string();
        let theme_changed = theme_now != theme_before;
        if theme_changed {
            self.state.valuation.record_theme_switch();
        }

        if let Some(presenter) = &self.presenter {
            if theme_changed {
                presenter.present(&PresenterEvent::ThemeChanged { theme: theme_now });
            }
            let verb = verb.to_string();
            presenter.present(&if status.is_success() {
                PresenterEvent::Succeeded { verb }
            } else {
                PresenterEvent::Failed { verb }
            });
        }

        if self.autosave_every > 0 && self.state.counters.commands_run % self.autosave_every == 0 {
            if let Err(e) = self.state.persist() {
                tracing::warn!(target: "osprey.store", error = %e, "autosave failed");
            }
        }
    }
}
