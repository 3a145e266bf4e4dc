//! Product and category route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use showroom_core::Price;
use showroom_core::pagination::BrowseState;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::pages::{self, PriceRange};
use crate::state::AppState;

/// Product listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    pub category: Option<String>,
    #[serde(default)]
    pub q: String,
    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub min_price: Option<Decimal>,
    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub max_price: Option<Decimal>,
    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub page: Option<usize>,
}

impl ProductsQuery {
    /// Price bounds, if either side was given.
    fn price_range(&self) -> Result<Option<PriceRange>> {
        if self.min_price.is_none() && self.max_price.is_none() {
            return Ok(None);
        }
        let min = self.min_price.unwrap_or(Decimal::ZERO);
        let max = self.max_price.unwrap_or(Decimal::MAX);
        if min > max {
            return Err(AppError::BadRequest(format!(
                "min_price {min} is greater than max_price {max}"
            )));
        }
        Ok(Some(PriceRange {
            min: Price::new(min),
            max: Price::new(max),
        }))
    }
}

/// Related products query parameters.
#[derive(Debug, Deserialize)]
pub struct RelatedQuery {
    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub limit: Option<usize>,
}

/// Display product listing page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<Response> {
    let price = query.price_range()?;
    let doc = state.catalog().load().await?;

    let mut browse = BrowseState::new(state.pages().list_page_size);
    browse.set_category(query.category.as_deref());
    browse.set_keyword(&query.q);
    browse.restore_page(query.page.unwrap_or(1));

    let listing = pages::product_listing(&doc, state.product_kind(), &mut browse, price)?;
    Ok(Json(listing).into_response())
}

/// Display product detail page.
#[instrument(skip(state), fields(id = %id))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let doc = state.catalog().load().await?;
    let detail = pages::product_detail(
        &doc,
        state.product_kind(),
        &id,
        state.pages().related_limit,
    )?;
    Ok(Json(detail).into_response())
}

/// Related products for a product.
#[instrument(skip(state), fields(id = %id))]
pub async fn related(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<RelatedQuery>,
) -> Result<Response> {
    let limit = query.limit.unwrap_or(state.pages().related_limit);
    let doc = state.catalog().load().await?;
    let related = pages::related(&doc, state.product_kind(), &id, limit)?;
    Ok(Json(related).into_response())
}

/// All categories.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Result<Response> {
    let doc = state.catalog().load().await?;
    Ok(Json(doc.categories()?).into_response())
}

/// One category with its products.
#[instrument(skip(state), fields(id = %id))]
pub async fn category(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let doc = state.catalog().load().await?;
    Ok(Json(pages::category(&doc, &id)?).into_response())
}
