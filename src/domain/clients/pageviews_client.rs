//! Client trait and wire types for the per-country top articles API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ClientResult;
use crate::domain::entities::{AccessPlatform, ReportDate};

/// Key of one statistics lookup: a country's top list for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopQuery {
    pub country_code: String,
    pub access: AccessPlatform,
    pub date: ReportDate,
}

impl TopQuery {
    pub fn new(country_code: impl Into<String>, access: AccessPlatform, date: ReportDate) -> Self {
        Self {
            country_code: country_code.into(),
            access,
            date,
        }
    }
}

/// Body of a top-per-country response.
///
/// Wikimedia answers with `{"items": [...]}`. Some proxies and the "no data"
/// path answer with a bare array instead, which carries no articles.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TopArticlesResponse {
    Items { items: Vec<CountryTopList> },
    Empty(Vec<serde_json::Value>),
}

impl TopArticlesResponse {
    /// A response that contributes no records.
    pub fn empty() -> Self {
        Self::Empty(Vec::new())
    }
}

/// Top list of one country as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CountryTopList {
    /// ISO 3166-1 alpha-2 code.
    pub country: String,
    #[serde(default)]
    pub articles: Vec<TopArticle>,
}

/// One ranked entry of a country's top list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TopArticle {
    pub rank: u32,
    pub article: String,
    /// Views rounded up to the API's privacy bucket.
    pub views_ceil: u64,
    pub project: String,
}

/// Source of per-country daily top lists.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::WikimediaClient`] - Wikimedia REST API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageviewsClient: Send + Sync {
    /// Fetches the top list for `query`.
    ///
    /// A day without data for the country is an empty response, not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`super::ClientError`] on transport failures, unexpected
    /// status codes, or undecodable bodies.
    async fn top_per_country(&self, query: &TopQuery) -> ClientResult<TopArticlesResponse>;

    /// Checks whether the upstream API is reachable.
    async fn health_check(&self) -> bool;
}
