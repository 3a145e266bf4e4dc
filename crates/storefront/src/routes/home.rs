//! Home page and testimonial handlers.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::pages;
use crate::state::AppState;

/// Testimonials shown when the client does not ask for a count.
const DEFAULT_TESTIMONIAL_COUNT: usize = 3;

/// Display home page data.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Response> {
    let doc = state.catalog().load().await?;
    let page = pages::home(&doc, state.product_kind(), state.pages().featured_limit)?;
    Ok(Json(page).into_response())
}

/// Testimonial query parameters.
#[derive(Debug, Deserialize)]
pub struct TestimonialsQuery {
    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub count: Option<usize>,
}

/// Random selection of distinct testimonials.
#[instrument(skip(state))]
pub async fn testimonials(
    State(state): State<AppState>,
    Query(query): Query<TestimonialsQuery>,
) -> Result<Response> {
    let doc = state.catalog().load().await?;
    let count = query.count.unwrap_or(DEFAULT_TESTIMONIAL_COUNT);
    let picked = pages::random_testimonials(&doc, count, &mut rand::rng())?;
    Ok(Json(picked).into_response())
}
