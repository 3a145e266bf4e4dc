//! Showroom Storefront library.
//!
//! Loads the catalog document, keeps it memoized and serves the site's page
//! data as JSON. The binary in `main.rs` only adds process concerns (config,
//! Sentry, logging, signal handling) on top of [`app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod pages;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Method, Request, Response},
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use state::AppState;

/// Build the full router with request tracing, request IDs and optional CORS.
///
/// Layers run outermost first: trace span, request ID, then CORS.
pub fn app(state: AppState) -> Router {
    let cors = state.config().cors_origin.as_deref().and_then(cors_layer);

    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
                status = tracing::field::Empty,
                latency_ms = tracing::field::Empty,
            )
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, span: &Span| {
                span.record("status", response.status().as_u16());
                span.record(
                    "latency_ms",
                    u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                );
                DefaultOnResponse::default().on_response(response, latency, span);
            },
        );

    Router::new()
        .merge(routes::routes())
        .layer(
            ServiceBuilder::new()
                .layer(trace)
                .layer(axum::middleware::from_fn(
                    middleware::request_id_middleware,
                ))
                .option_layer(cors),
        )
        .with_state(state)
}

fn cors_layer(origin: &str) -> Option<CorsLayer> {
    match HeaderValue::from_str(origin) {
        Ok(origin) => Some(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        ),
        Err(e) => {
            tracing::warn!(origin, error = %e, "Ignoring invalid CORS origin");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{StatusCode, header};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::{CatalogStore, FileSource};
    use crate::config::StorefrontConfig;

    fn state(cors_origin: Option<&str>) -> AppState {
        let mut config = StorefrontConfig::from_lookup(|_| None).unwrap();
        config.cors_origin = cors_origin.map(str::to_owned);
        AppState::with_catalog(
            config,
            CatalogStore::new(FileSource::new("does/not/exist.json")),
        )
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::ORIGIN, "https://shop.example.test")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_without_catalog() {
        let response = app(state(None)).oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(middleware::REQUEST_ID_HEADER));
        assert!(
            !response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }

    #[tokio::test]
    async fn test_cors_origin_allowed() {
        let response = app(state(Some("https://shop.example.test")))
            .oneshot(get("/api/home"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://shop.example.test"
        );
    }

    #[test]
    fn test_invalid_cors_origin_ignored() {
        assert!(cors_layer("bad\norigin").is_none());
        assert!(cors_layer("https://shop.example.test").is_some());
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = app(state(None)).oneshot(get("/api/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
