//! BigDataCloud reverse-geocode client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::get_json;
use crate::domain::clients::{ClientError, ClientResult, Coordinates, LocationClient};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReverseGeocodeResponse {
    #[serde(default)]
    country_code: String,
}

/// Resolves coordinates through the keyless `reverse-geocode-client` endpoint.
#[derive(Clone)]
pub struct BigDataCloudClient {
    client: Client,
    endpoint: String,
}

impl BigDataCloudClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    fn lookup_url(&self, coordinates: Coordinates) -> ClientResult<String> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| ClientError::InvalidInput(format!("invalid location endpoint: {e}")))?;
        url.query_pairs_mut()
            .append_pair("latitude", &coordinates.latitude.to_string())
            .append_pair("longitude", &coordinates.longitude.to_string())
            .append_pair("localityLanguage", "en");
        Ok(url.into())
    }
}

#[async_trait]
impl LocationClient for BigDataCloudClient {
    async fn country_code(&self, coordinates: Coordinates) -> ClientResult<String> {
        if !coordinates.is_valid() {
            return Err(ClientError::InvalidInput(format!(
                "coordinates out of range: {}, {}",
                coordinates.latitude, coordinates.longitude
            )));
        }

        let url = self.lookup_url(coordinates)?;
        debug!(%url, "Reverse geocoding");

        let response = get_json::<ReverseGeocodeResponse>(&self.client, &url)
            .await?
            .ok_or_else(|| ClientError::Decode("location endpoint not found".to_string()))?;

        if response.country_code.is_empty() {
            return Err(ClientError::Decode(
                "no country at these coordinates".to_string(),
            ));
        }

        Ok(response.country_code.to_ascii_uppercase())
    }
}
