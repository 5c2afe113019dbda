//! Handler for geolocation lookups.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::location::{LocationQuery, LocationResponse};
use crate::domain::countries;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves browser coordinates to a country.
///
/// # Endpoint
///
/// `GET /api/location?lat={latitude}&lon={longitude}`
///
/// # Response
///
/// ```json
/// { "country": "CD", "name": "Democratic Republic of the Congo" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for out-of-range coordinates and 502 Bad Gateway
/// when the lookup fails.
pub async fn location_handler(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<LocationResponse>, AppError> {
    let country = state.location_service.locate(query.lat, query.lon).await?;
    let name = countries::country_name(&country);

    Ok(Json(LocationResponse { country, name }))
}
