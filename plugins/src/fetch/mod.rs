pub mod raw;

pub use raw::HttpRawFetcher;
