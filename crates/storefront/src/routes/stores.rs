//! Store locator handler.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::{Datelike, Local};
use serde::Deserialize;
use showroom_core::query::stores::StoreFilter;
use tracing::instrument;

use crate::error::Result;
use crate::pages;
use crate::state::AppState;

/// Store locator query parameters.
#[derive(Debug, Deserialize)]
pub struct StoreLocatorQuery {
    /// Comma-separated services a store must all offer.
    #[serde(default)]
    pub services: String,
    #[serde(default)]
    pub q: String,
    /// ID of the store currently selected on the map.
    pub selected: Option<String>,
}

impl StoreLocatorQuery {
    fn filter(&self) -> StoreFilter {
        StoreFilter {
            services: self
                .services
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
            keyword: self.q.clone(),
        }
    }
}

/// Stores matching the filter, with today's open/closed flag.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<StoreLocatorQuery>,
) -> Result<Response> {
    let doc = state.catalog().load().await?;
    let today = Local::now().weekday();
    let page = pages::store_locator(&doc, &query.filter(), query.selected.as_deref(), today);
    Ok(Json(page).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_split_and_trimmed() {
        let query = StoreLocatorQuery {
            services: " Repair, ,Appraisal ".to_string(),
            q: String::new(),
            selected: None,
        };
        let filter = query.filter();
        assert_eq!(
            filter.services.iter().map(String::as_str).collect::<Vec<_>>(),
            ["Appraisal", "Repair"]
        );
    }
}
