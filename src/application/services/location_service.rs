//! Geolocation to country resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::domain::clients::{Coordinates, LocationClient};
use crate::error::AppError;

/// Service turning browser coordinates into a country code.
pub struct LocationService {
    client: Arc<dyn LocationClient>,
}

impl LocationService {
    pub fn new(client: Arc<dyn LocationClient>) -> Self {
        Self { client }
    }

    /// Resolves `latitude`/`longitude` to an ISO 3166-1 alpha-2 code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for coordinates out of range and
    /// [`AppError::Upstream`] when the lookup fails.
    pub async fn locate(&self, latitude: f64, longitude: f64) -> Result<String, AppError> {
        let coordinates = Coordinates::new(latitude, longitude);
        if !coordinates.is_valid() {
            return Err(AppError::bad_request(
                "Coordinates out of range",
                json!({ "latitude": latitude, "longitude": longitude }),
            ));
        }

        self.client.country_code(coordinates).await.map_err(|e| {
            warn!(latitude, longitude, error = %e, "Location lookup failed");
            AppError::upstream(
                "Error fetching location data.",
                json!({ "reason": e.to_string() }),
            )
        })
    }
}
