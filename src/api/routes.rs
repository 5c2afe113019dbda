//! API route configuration.

use crate::api::handlers::{
    articles_handler, country_articles_handler, location_handler, submission_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public JSON API routes.
///
/// # Endpoints
///
/// - `GET  /articles`                  - Aggregated top articles (paginated)
/// - `GET  /countries/{code}/articles` - One country's top articles (paginated)
/// - `GET  /location`                  - Coordinates to country code
/// - `POST /submissions`               - Validate a request form submission
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(articles_handler))
        .route("/countries/{code}/articles", get(country_articles_handler))
        .route("/location", get(location_handler))
        .route("/submissions", post(submission_handler))
}
