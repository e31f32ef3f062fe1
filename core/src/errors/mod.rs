pub mod cli_error;
pub mod command_error;
pub mod config_error;
pub mod store_error;
pub mod sync_error;

pub use cli_error::CliError;
pub use command_error::CommandError;
pub use config_error::ConfigError;
pub use store_error::StoreError;
pub use sync_error::{FetchError, SyncError};
