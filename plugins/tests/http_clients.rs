//! Integration tests for the HTTP plugins against a local mock server

use osprey_core::api::{FetchError, RawFetcher, RepoSource, SyncError};
use osprey_plugins::fetch::HttpRawFetcher;
use osprey_plugins::github::GithubRepoSource;

fn source(base: String) -> GithubRepoSource {
    GithubRepoSource::new(base, "osprey-test", 2_000).expect("client")
}

#[tokio::test]
async fn test_repo_info_reads_metadata() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/pewpi-infinity/legend-core")
        .match_header("user-agent", "osprey-test")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"size": 120, "stargazers_count": 3, "forks_count": 1, "name": "legend-core"}"#)
        .create_async()
        .await;

    let info = source(server.url())
        .repo_info("pewpi-infinity", "legend-core")
        .await
        .expect("repo info");
    assert_eq!(info.size, 120);
    assert_eq!(info.stargazers_count, 3);
    assert_eq!(info.forks_count, 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/o/gone")
        .with_status(404)
        .create_async()
        .await;

    let err = source(server.url()).repo_info("o", "gone").await.unwrap_err();
    assert!(matches!(err, SyncError::HttpStatus { status: 404 }));
}

#[tokio::test]
async fn test_content_count_handles_arrays_and_objects() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/o/many/contents")
        .with_status(200)
        .with_body(r#"[{"name":"a"},{"name":"b"},{"name":"c"}]"#)
        .create_async()
        .await;
    server
        .mock("GET", "/repos/o/one/contents")
        .with_status(200)
        .with_body(r#"{"name":"README.md"}"#)
        .create_async()
        .await;

    let src = source(format!("{}/", server.url()));
    assert_eq!(src.content_count("o", "many").await.unwrap(), 3);
    assert_eq!(src.content_count("o", "one").await.unwrap(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/o/bad")
        .with_status(200)
        .with_body("<html>")
        .create_async()
        .await;

    let err = source(server.url()).repo_info("o", "bad").await.unwrap_err();
    assert!(matches!(err, SyncError::Decode(_)));
}

#[tokio::test]
async fn test_raw_fetcher_returns_body_or_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/o/r/main/app.py")
        .with_status(200)
        .with_body("print('hi')\n")
        .create_async()
        .await;
    server
        .mock("GET", "/o/r/main/missing.py")
        .with_status(404)
        .create_async()
        .await;

    let fetcher = HttpRawFetcher::new("osprey-test", 2_000).expect("client");
    let body = fetcher
        .fetch_text(&format!("{}/o/r/main/app.py", server.url()))
        .await
        .unwrap();
    assert_eq!(body, "print('hi')\n");

    let err = fetcher
        .fetch_text(&format!("{}/o/r/main/missing.py", server.url()))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_raw_fetcher_rejects_non_http_urls() {
    let fetcher = HttpRawFetcher::new("osprey-test", 2_000).expect("client");
    for url in ["not a url", "file:///etc/passwd"] {
        let err = fetcher.fetch_text(url).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)), "{url}");
    }
}
