pub mod client;

pub use client::GithubRepoSource;
