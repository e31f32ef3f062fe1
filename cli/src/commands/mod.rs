pub mod cli;
pub mod exec;
pub mod repl;
pub mod sync;
