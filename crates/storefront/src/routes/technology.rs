//! Technology page handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::pages;
use crate::state::AppState;

/// Comparison query parameters.
#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub a: Option<String>,
    pub b: Option<String>,
}

/// Every technology.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Response> {
    let doc = state.catalog().load().await?;
    Ok(Json(pages::technology(&doc)?).into_response())
}

/// One technology.
#[instrument(skip(state), fields(id = %id))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let doc = state.catalog().load().await?;
    Ok(Json(pages::technology_detail(&doc, &id)?).into_response())
}

/// Two technologies side by side.
#[instrument(skip(state))]
pub async fn compare(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Result<Response> {
    let (Some(a), Some(b)) = (query.a.as_deref(), query.b.as_deref()) else {
        return Err(AppError::BadRequest(
            "both a and b technology IDs are required".to_string(),
        ));
    };
    let doc = state.catalog().load().await?;
    Ok(Json(pages::compare(&doc, a, b)?).into_response())
}
