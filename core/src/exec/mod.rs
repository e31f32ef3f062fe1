//! Faux filesystem executor. Nothing here touches the real disk.

mod fetcher;
mod vfs;

pub use fetcher::{file_name_from_url, RawFetcher};
pub use vfs::VirtualFs;
