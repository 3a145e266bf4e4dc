//! Catalog maintenance handlers.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::error::Result;
use crate::pages;
use crate::state::AppState;

/// Every product and category, unpaged.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Response> {
    let doc = state.catalog().load().await?;
    Ok(Json(pages::product_list(&doc)?).into_response())
}

/// One top-level section of the document, as stored. Unknown section names
/// are 404.
#[instrument(skip(state), fields(section = %name))]
pub async fn section(State(state): State<AppState>, Path(name): Path<String>) -> Result<Response> {
    let value: Value = state.catalog().section(&name).await?;
    Ok(Json(value).into_response())
}

/// Summary of a freshly loaded document.
#[derive(Debug, Serialize)]
pub struct ReloadSummary {
    pub source: String,
    pub products: usize,
    pub categories: usize,
}

/// Drop the cached catalog and load it again.
///
/// The cached document is dropped before the new fetch, so a failed reload
/// replaces a good document: every page answers 503 until a later reload
/// succeeds.
#[instrument(skip(state))]
pub async fn reload(State(state): State<AppState>) -> Result<Json<ReloadSummary>> {
    let doc = state.catalog().reload().await?;
    Ok(Json(ReloadSummary {
        source: state.catalog().location().to_string(),
        products: doc.products.as_ref().map_or(0, Vec::len),
        categories: doc.categories.as_ref().map_or(0, Vec::len),
    }))
}
