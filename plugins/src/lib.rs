pub mod factory;
pub mod fetch;
pub mod github;
pub mod services;
pub mod store;
