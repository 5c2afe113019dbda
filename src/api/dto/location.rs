//! DTOs for the geolocation lookup endpoint.

use serde::{Deserialize, Serialize};

/// Coordinates reported by the browser.
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Country resolved from coordinates.
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    /// ISO 3166-1 alpha-2 code.
    pub country: String,
    /// Display name, or the code itself when the catalog does not know it.
    pub name: String,
}
