//! Dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{africa_handler, country_handler, form_handler, submit_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Dashboard pages.
///
/// # Endpoints
///
/// - `GET  /`               - Aggregated top articles of all configured countries
/// - `GET  /form`           - Request form (country, date, access platform)
/// - `POST /submit`         - Form submission, redirects to the country page
/// - `GET  /country/{code}` - Top articles of one country
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(africa_handler))
        .route("/form", get(form_handler))
        .route("/submit", post(submit_handler))
        .route("/country/{code}", get(country_handler))
}
