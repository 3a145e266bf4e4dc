//! Integration tests for the Showroom storefront API.
//!
//! Each test starts the full router on an ephemeral local port, backed by a
//! catalog file in a temporary directory, and talks to it over HTTP. Tests of
//! the remote source also start a [`catalog_host`] for the storefront to
//! fetch from.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p showroom-integration-tests
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{Router, http::header, routing::get};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use showroom_storefront::{app, config::StorefrontConfig, state::AppState};
use tempfile::TempDir;

/// The sample catalog shipped with the storefront.
pub const SAMPLE_CATALOG: &str = include_str!("../../../assets/data/catalog.json");

/// Parsed copy of [`SAMPLE_CATALOG`] for tests that tweak sections.
#[must_use]
pub fn sample_catalog() -> Value {
    serde_json::from_str(SAMPLE_CATALOG).expect("Sample catalog is valid JSON")
}

/// A running storefront and an HTTP client pointed at it.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    catalog_path: PathBuf,
    _dir: TempDir,
}

impl TestContext {
    /// Start a storefront serving the sample catalog with default settings.
    pub async fn new() -> Self {
        Self::start(Some(&sample_catalog()), |_| {}).await
    }

    /// Start a storefront serving `catalog`, or pointing at a file that does
    /// not exist yet when `catalog` is `None`.
    ///
    /// `configure` can adjust page sizes or the product kind before the
    /// server starts; the data source is always the temporary file.
    pub async fn start<F>(catalog: Option<&Value>, configure: F) -> Self
    where
        F: FnOnce(&mut StorefrontConfig),
    {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let catalog_path = dir.path().join("catalog.json");

        let mut config = default_config();
        configure(&mut config);
        config.catalog.data_source = catalog_path.display().to_string();

        let ctx = Self {
            client: Client::new(),
            base_url: String::new(),
            catalog_path,
            _dir: dir,
        };
        if let Some(catalog) = catalog {
            ctx.write_catalog(catalog);
        }
        ctx.launch(config).await
    }

    /// Start a storefront whose data source is `location`, usually a URL on
    /// a [`catalog_host`].
    pub async fn remote(location: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = default_config();
        config.catalog.data_source = location.to_string();

        let ctx = Self {
            client: Client::new(),
            base_url: String::new(),
            catalog_path: dir.path().join("catalog.json"),
            _dir: dir,
        };
        ctx.launch(config).await
    }

    async fn launch(self, config: StorefrontConfig) -> Self {
        let state = AppState::new(config).expect("Failed to initialize application state");
        let addr = serve(state).await;
        Self {
            base_url: format!("http://{addr}"),
            ..self
        }
    }

    /// Overwrite the catalog file; takes effect after a reload.
    pub fn write_catalog(&self, catalog: &Value) {
        let bytes = serde_json::to_vec_pretty(catalog).expect("Failed to serialize catalog");
        std::fs::write(&self.catalog_path, bytes).expect("Failed to write catalog");
    }

    /// Write raw bytes as the catalog file.
    pub fn write_raw(&self, contents: &str) {
        std::fs::write(&self.catalog_path, contents).expect("Failed to write catalog");
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET `path` and return the raw response.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET `path` and decode the JSON body.
    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        json_of(self.get(path).await).await
    }

    /// POST to `path` with an empty body and decode the JSON response.
    pub async fn post_json(&self, path: &str) -> (StatusCode, Value) {
        let resp = self
            .client
            .post(self.url(path))
            .send()
            .await
            .expect("Request failed");
        json_of(resp).await
    }
}

fn default_config() -> StorefrontConfig {
    StorefrontConfig::from_lookup(|_| None).expect("Default configuration is valid")
}

/// Bind an ephemeral port and serve the app on it in the background.
async fn serve(state: AppState) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().expect("Listener has no local address");

    tokio::spawn(async move {
        axum::serve(listener, app(state))
            .await
            .expect("Server error");
    });

    addr
}

/// Serve catalog documents over HTTP on an ephemeral port.
///
/// - `/catalog.json` answers with [`SAMPLE_CATALOG`]
/// - `/broken` answers 500
/// - anything else answers 404
///
/// Returns the base URL, without a trailing slash.
pub async fn catalog_host() -> String {
    let router = Router::new()
        .route(
            "/catalog.json",
            get(|| async { ([(header::CONTENT_TYPE, "application/json")], SAMPLE_CATALOG) }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().expect("Listener has no local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server error");
    });

    format!("http://{addr}")
}

async fn json_of(resp: reqwest::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let body = resp.json().await.expect("Response body is not JSON");
    (status, body)
}

/// Product IDs of a list of product cards.
#[must_use]
pub fn ids(cards: &Value) -> Vec<String> {
    cards
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["id"].as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}
