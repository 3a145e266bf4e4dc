//! Catalog documents fetched over HTTP.

use reqwest::StatusCode;
use showroom_integration_tests::{TestContext, catalog_host};

const LOAD_FAILED: &str = "Failed to load data. Please try again later.";

#[tokio::test]
async fn test_remote_catalog_loads() {
    let url = format!("{}/catalog.json", catalog_host().await);
    let ctx = TestContext::remote(&url).await;

    let (status, body) = ctx.get_json("/api/catalog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"].as_array().map(Vec::len), Some(12));

    let (status, summary) = ctx.post_json("/api/catalog/reload").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["source"], url);
    assert_eq!(summary["categories"], 4);
}

#[tokio::test]
async fn test_remote_not_found_is_unavailable() {
    let url = format!("{}/missing.json", catalog_host().await);
    let ctx = TestContext::remote(&url).await;

    let (status, body) = ctx.get_json("/api/home").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], LOAD_FAILED);
}

#[tokio::test]
async fn test_remote_server_error_is_unavailable() {
    let url = format!("{}/broken", catalog_host().await);
    let ctx = TestContext::remote(&url).await;

    let (status, body) = ctx.get_json("/api/products").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], LOAD_FAILED);

    let (status, body) = ctx.post_json("/api/catalog/reload").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], LOAD_FAILED);
}

#[tokio::test]
async fn test_unreachable_host_is_unavailable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().expect("Listener has no local address");
    drop(listener);

    let ctx = TestContext::remote(&format!("http://{addr}/catalog.json")).await;
    let (status, _) = ctx.get_json("/api/home").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
