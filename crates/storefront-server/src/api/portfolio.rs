use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use storefront_core::{GalleryPage, ITEMS_PER_LOAD};

use super::AppState;

const MAX_PAGE_SIZE: usize = 48;

#[derive(Debug, Default, Deserialize)]
pub(super) struct PortfolioQuery {
    pub cursor: Option<usize>,
    pub limit: Option<usize>,
}

pub(super) fn normalize_limit(limit: Option<usize>) -> usize {
    limit.unwrap_or(ITEMS_PER_LOAD).clamp(1, MAX_PAGE_SIZE)
}

pub(super) async fn list_portfolio(
    State(state): State<AppState>,
    Query(query): Query<PortfolioQuery>,
) -> Json<GalleryPage> {
    let page = state
        .gallery
        .page(query.cursor.unwrap_or(0), normalize_limit(query.limit));
    Json(page)
}
