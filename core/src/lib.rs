pub mod api;
pub mod commands;
pub mod config;
pub mod context;
pub mod errors;
pub mod exec;
pub mod mongoose;
pub mod presenter;
pub mod router;
pub mod state;
pub mod store;
pub mod sync;
pub mod theme;
pub mod token_machine;
pub mod valuation;
