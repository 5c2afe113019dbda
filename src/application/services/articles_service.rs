//! Top articles aggregation service.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use futures::future::{join_all, try_join_all};
use serde_json::json;
use tracing::{info, warn};

use crate::domain::article_filter::ArticleFilter;
use crate::domain::clients::{PageviewsClient, TopArticlesResponse, TopQuery};
use crate::domain::countries;
use crate::domain::entities::{AccessPlatform, ArticleRecord, Country, ReportDate};
use crate::error::AppError;

/// How the per-country fan-out treats individual failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinPolicy {
    /// Any failed request fails the whole batch.
    #[default]
    AllOrNothing,
    /// Failed requests are logged and skipped. The batch fails only when
    /// every request failed.
    Tolerant,
}

impl JoinPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllOrNothing => "all-or-nothing",
            Self::Tolerant => "tolerant",
        }
    }
}

impl fmt::Display for JoinPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JoinPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all-or-nothing" => Ok(Self::AllOrNothing),
            "tolerant" => Ok(Self::Tolerant),
            other => Err(format!(
                "expected 'all-or-nothing' or 'tolerant', got '{other}'"
            )),
        }
    }
}

/// Service building flattened, filtered top-article lists.
///
/// Issues one pageviews request per configured country, joins them
/// concurrently, flattens the responses into [`ArticleRecord`]s and runs the
/// result through the configured [`ArticleFilter`].
pub struct ArticlesService {
    client: Arc<dyn PageviewsClient>,
    filter: Arc<dyn ArticleFilter>,
    countries: Vec<Country>,
    join_policy: JoinPolicy,
}

impl ArticlesService {
    /// Creates a new articles service fanning out over `countries`.
    pub fn new(
        client: Arc<dyn PageviewsClient>,
        filter: Arc<dyn ArticleFilter>,
        countries: Vec<Country>,
        join_policy: JoinPolicy,
    ) -> Self {
        Self {
            client,
            filter,
            countries,
            join_policy,
        }
    }

    /// Countries queried by [`Self::continent_top`].
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn join_policy(&self) -> JoinPolicy {
        self.join_policy
    }

    /// Whether the pageviews API answers.
    pub async fn upstream_healthy(&self) -> bool {
        self.client.health_check().await
    }

    /// Top articles of every configured country for one day.
    ///
    /// Records keep the order of the configured countries, then the API rank.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the batch fails under the configured
    /// [`JoinPolicy`].
    pub async fn continent_top(
        &self,
        date: ReportDate,
        access: AccessPlatform,
    ) -> Result<Vec<ArticleRecord>, AppError> {
        let started = Instant::now();
        let queries: Vec<TopQuery> = self
            .countries
            .iter()
            .map(|country| TopQuery::new(country.code, access, date))
            .collect();

        let responses = self.fetch_all(&queries).await?;
        let records = self.filter.filter(flatten(responses));

        info!(
            countries = queries.len(),
            records = records.len(),
            %date,
            %access,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Aggregated top articles"
        );

        Ok(records)
    }

    /// Top articles of a single country for one day.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed country code and
    /// [`AppError::Upstream`] when the request fails.
    pub async fn country_top(
        &self,
        country_code: &str,
        date: ReportDate,
        access: AccessPlatform,
    ) -> Result<Vec<ArticleRecord>, AppError> {
        let query = TopQuery::new(country_code.to_ascii_uppercase(), access, date);
        let response = self.client.top_per_country(&query).await?;
        Ok(self.filter.filter(flatten(vec![response])))
    }

    async fn fetch_all(&self, queries: &[TopQuery]) -> Result<Vec<TopArticlesResponse>, AppError> {
        let requests = queries
            .iter()
            .map(|query| self.client.top_per_country(query));

        match self.join_policy {
            JoinPolicy::AllOrNothing => try_join_all(requests).await.map_err(|e| {
                warn!(error = %e, "Top articles batch failed");
                AppError::from(e)
            }),
            JoinPolicy::Tolerant => {
                let results = join_all(requests).await;
                let mut responses = Vec::with_capacity(results.len());
                let mut last_error = None;

                for (query, result) in queries.iter().zip(results) {
                    match result {
                        Ok(response) => responses.push(response),
                        Err(e) => {
                            warn!(country = %query.country_code, error = %e, "Skipping failed country");
                            last_error = Some(e);
                        }
                    }
                }

                match last_error {
                    Some(e) if responses.is_empty() => Err(e.into()),
                    _ => Ok(responses),
                }
            }
        }
    }
}

/// Flattens per-country responses into records.
///
/// Country codes are resolved to display names through the catalog; array
/// responses contribute nothing.
pub fn flatten(responses: Vec<TopArticlesResponse>) -> Vec<ArticleRecord> {
    responses
        .into_iter()
        .flat_map(|response| match response {
            TopArticlesResponse::Items { items } => items,
            TopArticlesResponse::Empty(_) => Vec::new(),
        })
        .flat_map(|list| {
            let country = countries::country_name(&list.country);
            list.articles.into_iter().map(move |article| {
                ArticleRecord::new(
                    country.clone(),
                    article.rank,
                    article.article,
                    article.views_ceil,
                    article.project,
                )
            })
        })
        .collect()
}

/// Builds the fan-out country list from ISO codes.
///
/// # Errors
///
/// Returns [`AppError::Validation`] listing every code missing from the catalog.
pub fn resolve_countries(codes: &[String]) -> Result<Vec<Country>, AppError> {
    let mut resolved = Vec::with_capacity(codes.len());
    let mut unknown = Vec::new();

    for code in codes {
        match countries::find(code) {
            Some(country) => resolved.push(*country),
            None => unknown.push(code.clone()),
        }
    }

    if unknown.is_empty() {
        Ok(resolved)
    } else {
        Err(AppError::bad_request(
            "Unknown country codes",
            json!({ "codes": unknown }),
        ))
    }
}
