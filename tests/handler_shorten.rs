mod common;

use axum_test::TestServer;
use serde_json::json;
use url_encoder::routes::router;

#[tokio::test]
async fn test_shorten_success() {
    let (state, repo) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/shorturl")
        .json(&json!({ "url_string": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(json["shortUrl"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(repo.inner.len().await, 1);
}

#[tokio::test]
async fn test_shorten_sets_expiry_from_holding_duration() {
    let (state, repo) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    server
        .post("/shorturl")
        .json(&json!({ "url_string": "https://example.com/expiry" }))
        .await
        .assert_status_ok();

    let rows = repo.inner.rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].expiry_date,
        rows[0].creation_date + chrono::Days::new(u64::from(common::HOLD_DAYS))
    );
}

#[tokio::test]
async fn test_shorten_deduplication() {
    let (state, repo) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let first = server
        .post("/shorturl")
        .json(&json!({ "url_string": "https://dedup.com" }))
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/shorturl")
        .json(&json!({ "url_string": "https://dedup.com" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["shortUrl"], second["shortUrl"]);
    assert_ne!(first["id"], second["id"]);
    assert_eq!(repo.inner.len().await, 1);
}

#[tokio::test]
async fn test_shorten_empty_url_is_rejected_without_storage_call() {
    let (state, repo) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/shorturl")
        .json(&json!({ "url_string": "" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["id"].is_string());
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_shorten_missing_field_is_rejected() {
    let (state, repo) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/shorturl")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_shorten_malformed_body_is_rejected() {
    let (state, repo) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/shorturl")
        .content_type("application/json")
        .text("{not json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_shorten_without_holding_duration_is_configuration_error() {
    let (state, repo) = common::create_test_state_with_duration(None);
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/shorturl")
        .json(&json!({ "url_string": "https://example.com" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "configuration_error");
    assert!(repo.inner.is_empty().await);
}

#[tokio::test]
async fn test_shorten_storage_failure_is_server_error() {
    let server = TestServer::new(router(common::create_unavailable_state())).unwrap();

    let response = server
        .post("/shorturl")
        .json(&json!({ "url_string": "https://example.com" }))
        .await;

    response.assert_status_internal_server_error();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "storage_error");
}

#[tokio::test]
async fn test_shorten_sweeps_expired_mappings() {
    let (state, repo) = common::create_test_state();
    let yesterday = common::today().pred_opt().unwrap();
    common::create_test_mapping(&repo, "abc", "https://stale.com", yesterday).await;

    let server = TestServer::new(router(state)).unwrap();

    server
        .post("/shorturl")
        .json(&json!({ "url_string": "https://other.com" }))
        .await
        .assert_status_ok();

    let rows = repo.inner.rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].original_url.as_deref(), Some("https://other.com"));

    server.get("/abc").await.assert_status_not_found();
}

#[tokio::test]
async fn test_shorten_cors_allows_any_origin() {
    let (state, _repo) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/shorturl")
        .add_header("Origin", "https://somewhere.example")
        .json(&json!({ "url_string": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
