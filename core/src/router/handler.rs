use async_trait::async_trait;

use crate::errors::CommandError;
use crate::state::ShellState;

#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn call(&self, state: &mut ShellState, args: &[String]) -> Result<String, CommandError>;
}

/// Adapts a synchronous function or closure into a [`CommandHandler`].
pub struct FnHandler<F>(pub F);

#[async_trait]
impl<F> CommandHandler for FnHandler<F>
where
    F: Fn(&mut ShellState, &[String]) -> Result<String, CommandError> + Send + Sync,
{
    async fn call(&self, state: &mut ShellState, args: &[String]) -> Result<String, CommandError> {
        (self.0)(state, args)
    }
}
