//! Layered command router: a line is resolved against an ordered list of
//! command tables and the first table that knows the verb handles it.

mod dispatch;
mod fallback;
mod handler;
mod registry;
mod table;
mod tokenize;

pub use dispatch::{Dispatch, DispatchStatus, Router};
pub use fallback::{Fallback, RogersFallback};
pub use handler::{CommandHandler, FnHandler};
pub use registry::TableRegistry;
pub use table::CommandTable;
pub use tokenize::tokenize;
