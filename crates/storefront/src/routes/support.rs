//! Support page and service handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::pages::{self, FaqFilter};
use crate::state::AppState;

/// Support page query parameters.
#[derive(Debug, Deserialize)]
pub struct SupportQuery {
    pub topic: Option<String>,
    #[serde(default)]
    pub q: String,
}

/// FAQs, services and company details.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<SupportQuery>,
) -> Result<Response> {
    let doc = state.catalog().load().await?;
    let filter = FaqFilter {
        topic: query.topic.as_deref().filter(|t| !t.trim().is_empty()),
        keyword: &query.q,
    };
    Ok(Json(pages::support(&doc, filter)?).into_response())
}

/// One service with its pricing tiers.
#[instrument(skip(state), fields(id = %id))]
pub async fn service(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let doc = state.catalog().load().await?;
    Ok(Json(pages::service(&doc, &id)?).into_response())
}
