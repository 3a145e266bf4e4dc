//! About and contact page handlers.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::error::Result;
use crate::pages;
use crate::state::AppState;

/// Company profile, statistics and team.
#[instrument(skip(state))]
pub async fn about(State(state): State<AppState>) -> Result<Response> {
    let doc = state.catalog().load().await?;
    Ok(Json(pages::about(&doc)?).into_response())
}

/// Contact details, opening hours and store addresses.
#[instrument(skip(state))]
pub async fn contact(State(state): State<AppState>) -> Result<Response> {
    let doc = state.catalog().load().await?;
    Ok(Json(pages::contact(&doc)?).into_response())
}
