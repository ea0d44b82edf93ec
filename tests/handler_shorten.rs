mod common;

use common::{BASE_URL, TestStore};

#[tokio::test]
async fn test_shorten_returns_short_url() {
    let store = TestStore::new();
    let server = store.server();

    let response = server
        .get("/new")
        .add_query_param("url", "https://example.com/a")
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), format!("{BASE_URL}/G9"));
}

#[tokio::test]
async fn test_shorten_same_url_returns_same_code() {
    let store = TestStore::new();
    let server = store.server();

    let first = server
        .get("/new")
        .add_query_param("url", "https://example.com/a")
        .await
        .text();
    let second = server
        .get("/new")
        .add_query_param("url", "https://example.com/a")
        .await
        .text();

    assert_eq!(first, second);
    assert_eq!(store.read_json()["counter"], 1001);
}

#[tokio::test]
async fn test_shorten_distinct_urls_get_sequential_codes() {
    let store = TestStore::new();
    let server = store.server();

    let a = server
        .get("/new")
        .add_query_param("url", "https://example.com/a")
        .await
        .text();
    let b = server
        .get("/new")
        .add_query_param("url", "https://example.com/b")
        .await
        .text();

    assert_eq!(a, format!("{BASE_URL}/G9"));
    assert_eq!(b, format!("{BASE_URL}/GA"));
}

#[tokio::test]
async fn test_shorten_trims_whitespace() {
    let store = TestStore::new();
    let server = store.server();

    server
        .get("/new")
        .add_query_param("url", "https://example.com/a")
        .await
        .assert_status_ok();

    let padded = server
        .get("/new")
        .add_query_param("url", "  https://example.com/a  ")
        .await;

    padded.assert_status_ok();
    assert_eq!(padded.text(), format!("{BASE_URL}/G9"));
}

#[tokio::test]
async fn test_shorten_keeps_query_string_of_target() {
    let store = TestStore::new();
    let server = store.server();

    server
        .get("/new")
        .add_query_param("url", "https://wa.me/5541998694346?text=Hello,%20World&x=1")
        .await
        .assert_status_ok();

    let json = store.read_json();
    assert_eq!(
        json["urls"]["G9"]["url"],
        "https://wa.me/5541998694346?text=Hello,%20World&x=1"
    );
    assert_eq!(json["urls"]["G9"]["hits"], 0);
    assert!(json["urls"]["G9"]["created_at"].is_f64());
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let store = TestStore::new();
    let server = store.server();

    let response = server.get("/new").await;

    response.assert_status_bad_request();
    assert!(response.text().contains("'url' is required"));
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let store = TestStore::new();
    let server = store.server();

    let response = server.get("/new").add_query_param("url", "").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_unsupported_schemes() {
    let store = TestStore::new();
    let server = store.server();

    for url in ["ftp://x", "example.com", "mailto:someone@example.com"] {
        let response = server.get("/new").add_query_param("url", url).await;

        response.assert_status_bad_request();
        assert!(
            response.text().contains("http:// or https://"),
            "unexpected body for {url}"
        );
    }

    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_shorten_uses_configured_base_url() {
    let store = TestStore::new();
    let state = linkfile::AppState::for_file(
        store.path().to_str().unwrap(),
        "https://s.example.com",
    );
    let server = axum_test::TestServer::new(linkfile::routes::router(state)).unwrap();

    let response = server
        .get("/new")
        .add_query_param("url", "https://example.com/a")
        .await;

    assert_eq!(response.text(), "https://s.example.com/G9");
}

#[tokio::test]
async fn test_shorten_repeated_url_uses_first() {
    let store = TestStore::new();
    let server = store.server();

    let response = server
        .get("/new")
        .add_raw_query_param("url=https://a.example&url=https://b.example")
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), format!("{BASE_URL}/G9"));
    assert_eq!(store.read_json()["urls"]["G9"]["url"], "https://a.example");
    assert_eq!(store.read_json()["counter"], 1001);
}
