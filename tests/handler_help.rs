mod common;

use common::TestStore;

#[tokio::test]
async fn test_root_shows_usage() {
    let store = TestStore::new();
    let server = store.server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.starts_with("URL shortener is running!"));
    assert!(text.contains("/new?url=<URL>"));
    assert!(text.contains("http://0.0.0.0:8000/new?url="));
}

#[tokio::test]
async fn test_help_matches_root() {
    let store = TestStore::new();
    let server = store.server();

    let root = server.get("/").await.text();
    let help = server.get("/help").await;

    help.assert_status_ok();
    assert_eq!(help.text(), root);
}

#[tokio::test]
async fn test_help_is_plain_text() {
    let store = TestStore::new();
    let server = store.server();

    let response = server.get("/help").await;

    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));
}

#[tokio::test]
async fn test_help_does_not_create_store() {
    let store = TestStore::new();
    let server = store.server();

    server.get("/help").await.assert_status_ok();

    assert!(!store.path().exists());
}
