//! `reqwest`-backed implementations of the upstream client traits.
//!
//! Both clients share one connection pool built by [`build_http_client`].

mod bigdatacloud_client;
mod wikimedia_client;

pub use bigdatacloud_client::BigDataCloudClient;
pub use wikimedia_client::WikimediaClient;

use crate::domain::clients::{ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Builds the HTTP client shared by all upstream calls.
///
/// Wikimedia rejects anonymous traffic, so every request carries `user_agent`.
pub fn build_http_client(user_agent: &str, timeout: Duration) -> ClientResult<Client> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .gzip(true)
        .build()
        .map_err(ClientError::Transport)
}

/// Sends a GET request and decodes a JSON body.
///
/// Returns `Ok(None)` on `404 Not Found`; any other non-success status is a
/// [`ClientError::Status`].
pub async fn get_json<R: DeserializeOwned>(client: &Client, url: &str) -> ClientResult<Option<R>> {
    let response = client.get(url).send().await?;
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(ClientError::Status(
            status,
            response.text().await.unwrap_or_default(),
        ));
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body)
        .map(Some)
        .map_err(|e| ClientError::Decode(e.to_string()))
}
