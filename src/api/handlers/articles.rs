//! Handlers for top article result pages.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::articles::{ArticlesResponse, PaginationMeta};
use crate::api::dto::pagination::{ArticlesQueryParams, CountryQueryParams};
use crate::domain::entities::ViewMode;
use crate::domain::pagination::Page;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves one page of the aggregated top articles of all configured countries.
///
/// # Endpoint
///
/// `GET /api/articles`
///
/// # Query Parameters
///
/// - `date` (optional): Day to report, `YYYY-MM-DD` (default: yesterday)
/// - `access` (optional): Access platform (default: `all-access`)
/// - `view` (optional): `gallery` (12 per page) or `list` (18 per page), default `gallery`
/// - `page` (optional): Page number (default: 1)
///
/// # Response
///
/// ```json
/// {
///   "date": "2024-03-02",
///   "access": "all-access",
///   "view": "gallery",
///   "pagination": { "page": 1, "page_size": 12, "total_items": 40,
///                   "total_pages": 4, "has_prev": false, "has_next": true },
///   "items": [
///     { "country": "Kenya", "rank": 1, "title": "Nairobi", "views": 1500, "project": "en.wikipedia" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for invalid parameters and 502 Bad Gateway when
/// the upstream batch fails.
pub async fn articles_handler(
    State(state): State<AppState>,
    Query(params): Query<ArticlesQueryParams>,
) -> Result<Json<ArticlesResponse>, AppError> {
    let date = params.resolve_date()?;
    let access = params.access.resolve()?;
    let (view, page) = params.pagination.resolve(ViewMode::Gallery)?;

    let records = state.articles_service.continent_top(date, access).await?;
    let page = Page::slice(&records, page, view.page_size());

    Ok(Json(ArticlesResponse {
        date,
        access,
        view,
        country: None,
        pagination: PaginationMeta::from(&page),
        items: page.items,
    }))
}

/// Retrieves one page of a single country's top articles.
///
/// # Endpoint
///
/// `GET /api/countries/{code}/articles`
///
/// # Query Parameters
///
/// - `year`, `month`, `day` (optional, together): Day to report (default: yesterday)
/// - `access`, `view`, `page`: as for [`articles_handler`], but `view` defaults to `list`
///
/// # Errors
///
/// Returns 400 Bad Request for invalid parameters and 502 Bad Gateway when
/// the upstream request fails.
pub async fn country_articles_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<CountryQueryParams>,
) -> Result<Json<ArticlesResponse>, AppError> {
    let date = params.resolve_date()?;
    let access = params.access.resolve()?;
    let (view, page) = params.pagination.resolve(ViewMode::List)?;

    let records = state
        .articles_service
        .country_top(&code, date, access)
        .await?;
    let page = Page::slice(&records, page, view.page_size());

    Ok(Json(ArticlesResponse {
        date,
        access,
        view,
        country: Some(code.to_ascii_uppercase()),
        pagination: PaginationMeta::from(&page),
        items: page.items,
    }))
}
