//! Wikimedia REST API pageviews client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::get_json;
use crate::domain::clients::{
    ClientError, ClientResult, PageviewsClient, TopArticlesResponse, TopQuery,
};

/// Fetches per-country top lists from
/// `{base}/metrics/pageviews/top-per-country/{country}/{access}/{yyyy}/{mm}/{dd}`.
#[derive(Clone)]
pub struct WikimediaClient {
    client: Client,
    base_url: String,
}

impl WikimediaClient {
    /// Creates a client for the REST API rooted at `base_url`
    /// (e.g. `https://wikimedia.org/api/rest_v1`).
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full request URL for `query`.
    pub fn top_per_country_url(&self, query: &TopQuery) -> String {
        format!(
            "{}/metrics/pageviews/top-per-country/{}/{}/{}/{}/{}",
            self.base_url,
            query.country_code.to_ascii_uppercase(),
            query.access,
            query.date.year(),
            query.date.month(),
            query.date.day()
        )
    }
}

#[async_trait]
impl PageviewsClient for WikimediaClient {
    async fn top_per_country(&self, query: &TopQuery) -> ClientResult<TopArticlesResponse> {
        let code = &query.country_code;
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ClientError::InvalidInput(format!(
                "country code must be two letters, got '{code}'"
            )));
        }

        let url = self.top_per_country_url(query);
        debug!(%url, "Fetching top articles");

        match get_json::<TopArticlesResponse>(&self.client, &url).await {
            Ok(Some(response)) => Ok(response),
            Ok(None) => {
                debug!(country = %code, date = %query.date, "No top list published");
                Ok(TopArticlesResponse::empty())
            }
            Err(e) => {
                warn!(country = %code, date = %query.date, error = %e, "Top articles request failed");
                Err(e)
            }
        }
    }

    async fn health_check(&self) -> bool {
        match self.client.get(format!("{}/", self.base_url)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Pageviews API health check failed: {}", e);
                false
            }
        }
    }
}
