use async_trait::async_trait;

use crate::errors::FetchError;

/// Fetches a raw text document, used by `install`.
#[async_trait]
pub trait RawFetcher: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Last non-empty path segment of `url`, ignoring any query or fragment.
pub fn file_name_from_url(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').find(|s| !s.is_empty() && !s.contains(':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_last_segment() {
        assert_eq!(
            file_name_from_url("https://raw.githubusercontent.com/o/r/main/src/app.js"),
            Some("app.js")
        );
        assert_eq!(file_name_from_url("https://host/dir/readme.md?raw=1"), Some("readme.md"));
        assert_eq!(file_name_from_url("https://host/dir/"), Some("dir"));
        assert_eq!(file_name_from_url("https://"), None);
    }
}
