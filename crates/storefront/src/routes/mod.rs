//! HTTP route handlers for storefront.
//!
//! Every page of the site reads its data from the JSON API below. Handlers
//! load the memoized catalog, hand it to [`crate::pages`] and serialize the
//! result.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//! GET  /health/ready                    - 200 once the catalog loads, else 503
//!
//! # Catalog
//! GET  /api/home                        - Featured products, categories, company, stats
//! GET  /api/products                    - Listing (?category, q, min_price, max_price, page)
//! GET  /api/products/{id}               - Product detail with related products
//! GET  /api/products/{id}/related       - Related products (?limit)
//! GET  /api/search                      - Free-text search (?q)
//! GET  /api/categories                  - All categories
//! GET  /api/categories/{id}             - One category and its products
//! GET  /api/gallery                     - Gallery grid (?category, q, page)
//!
//! # Content
//! GET  /api/support                     - FAQs, services, company (?topic, q)
//! GET  /api/services/{id}               - One service
//! GET  /api/store-locator               - Stores (?services, q, selected)
//! GET  /api/technology                  - All technologies
//! GET  /api/technology/compare          - Two technologies side by side (?a, b)
//! GET  /api/technology/{id}             - One technology
//! GET  /api/about                       - Company, statistics, team
//! GET  /api/contact                     - Contact details and opening hours
//! GET  /api/testimonials                - Random testimonials (?count)
//!
//! # Raw data
//! GET  /api/catalog                     - All products and categories, unpaged
//! GET  /api/catalog/sections/{name}     - One top-level section of the document
//! POST /api/catalog/reload              - Drop the cached document and load it again
//! ```

pub mod catalog;
pub mod gallery;
pub mod health;
pub mod home;
pub mod pages;
pub mod products;
pub mod search;
pub mod stores;
pub mod support;
pub mod technology;

use std::fmt::Display;
use std::str::FromStr;

use axum::{
    Router,
    routing::{get, post},
};
use serde::{Deserialize, Deserializer};

use crate::state::AppState;

/// Deserialize empty query values as `None`.
pub(crate) fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/related", get(products::related))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::categories))
        .route("/{id}", get(products::category))
}

/// Create the technology routes router.
pub fn technology_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(technology::index))
        .route("/compare", get(technology::compare))
        .route("/{id}", get(technology::show))
}

/// Create the raw catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/sections/{name}", get(catalog::section))
        .route("/reload", post(catalog::reload))
}

/// Create the JSON API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(home::home))
        .nest("/products", product_routes())
        .route("/search", get(search::search))
        .nest("/categories", category_routes())
        .route("/gallery", get(gallery::index))
        .route("/support", get(support::index))
        .route("/services/{id}", get(support::service))
        .route("/store-locator", get(stores::index))
        .nest("/technology", technology_routes())
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/testimonials", get(home::testimonials))
        .nest("/catalog", catalog_routes())
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/api", api_routes())
}
