//! Gallery route handler.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use showroom_core::pagination::BrowseState;
use tracing::instrument;

use crate::error::Result;
use crate::pages;
use crate::state::AppState;

/// Gallery query parameters.
#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    pub category: Option<String>,
    #[serde(default)]
    pub q: String,
    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub page: Option<usize>,
}

/// Gallery grid, six to a page by default.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> Result<Response> {
    let doc = state.catalog().load().await?;

    let mut browse = BrowseState::new(state.pages().gallery_page_size);
    browse.set_category(query.category.as_deref());
    browse.set_keyword(&query.q);
    browse.restore_page(query.page.unwrap_or(1));

    Ok(Json(pages::gallery(&doc, &mut browse)).into_response())
}
