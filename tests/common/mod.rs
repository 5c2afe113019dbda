#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use top_africa::application::services::{ArticlesService, JoinPolicy, LocationService};
use top_africa::domain::article_filter::TrueArticles;
use top_africa::domain::clients::{
    ClientError, ClientResult, Coordinates, CountryTopList, LocationClient, PageviewsClient,
    TopArticle, TopArticlesResponse, TopQuery,
};
use top_africa::domain::countries;
use top_africa::state::AppState;

/// Countries the test state fans out over.
pub const TEST_COUNTRIES: [&str; 3] = ["KE", "NG", "SN"];

/// Records left after filtering the sample lists: 10 + 8 + 6.
pub const SAMPLE_RECORDS: usize = 24;

/// Pageviews client answering from canned per-country lists.
#[derive(Default)]
pub struct StubPageviews {
    pub lists: HashMap<String, Vec<TopArticle>>,
    pub failing: HashSet<String>,
    pub unhealthy: bool,
}

impl StubPageviews {
    pub fn with_list(mut self, code: &str, articles: Vec<TopArticle>) -> Self {
        self.lists.insert(code.to_string(), articles);
        self
    }

    pub fn failing(mut self, code: &str) -> Self {
        self.failing.insert(code.to_string());
        self
    }

    pub fn unhealthy(mut self) -> Self {
        self.unhealthy = true;
        self
    }
}

#[async_trait]
impl PageviewsClient for StubPageviews {
    async fn top_per_country(&self, query: &TopQuery) -> ClientResult<TopArticlesResponse> {
        if self.failing.contains(&query.country_code) {
            return Err(ClientError::Status(
                StatusCode::INTERNAL_SERVER_ERROR,
                "upstream exploded".to_string(),
            ));
        }

        Ok(match self.lists.get(&query.country_code) {
            Some(articles) => TopArticlesResponse::Items {
                items: vec![CountryTopList {
                    country: query.country_code.clone(),
                    articles: articles.clone(),
                }],
            },
            None => TopArticlesResponse::empty(),
        })
    }

    async fn health_check(&self) -> bool {
        !self.unhealthy
    }
}

/// Location client resolving every coordinate to the same country, or failing.
pub struct StubLocation {
    pub country: Option<String>,
}

impl StubLocation {
    pub fn resolving(code: &str) -> Self {
        Self {
            country: Some(code.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { country: None }
    }
}

#[async_trait]
impl LocationClient for StubLocation {
    async fn country_code(&self, _coordinates: Coordinates) -> ClientResult<String> {
        self.country
            .clone()
            .ok_or_else(|| ClientError::Decode("missing countryCode".to_string()))
    }
}

pub fn article(rank: u32, title: &str, views: u64, project: &str) -> TopArticle {
    TopArticle {
        rank,
        article: title.to_string(),
        views_ceil: views,
        project: project.to_string(),
    }
}

/// Kenya: main page plus 10 articles. Nigeria: 8 articles. Senegal: a special
/// page plus 6 articles.
pub fn sample_pageviews() -> StubPageviews {
    let mut kenya = vec![article(1, "Main_Page", 90_000, "en.wikipedia")];
    kenya.extend((2..=11).map(|rank| {
        article(rank, &format!("Kenya_Article_{rank}"), 5_000 - rank as u64, "en.wikipedia")
    }));

    let nigeria = (1..=8)
        .map(|rank| article(rank, &format!("Nigeria_Article_{rank}"), 4_000, "en.wikipedia"))
        .collect();

    let mut senegal = vec![article(1, "Spécial:Recherche", 20_000, "fr.wikipedia")];
    senegal.extend(
        (2..=7).map(|rank| article(rank, &format!("Sénégal_Article_{rank}"), 900, "fr.wikipedia")),
    );

    StubPageviews::default()
        .with_list("KE", kenya)
        .with_list("NG", nigeria)
        .with_list("SN", senegal)
}

pub fn create_test_state(
    pageviews: StubPageviews,
    location: StubLocation,
    join_policy: JoinPolicy,
) -> AppState {
    let countries = TEST_COUNTRIES
        .iter()
        .filter_map(|code| countries::find(code).copied())
        .collect();

    let articles_service = Arc::new(ArticlesService::new(
        Arc::new(pageviews),
        Arc::new(TrueArticles::new()),
        countries,
        join_policy,
    ));
    let location_service = Arc::new(LocationService::new(Arc::new(location)));

    AppState::new(articles_service, location_service)
}

/// Sample lists, a location lookup resolving to Kenya, all-or-nothing joins.
pub fn default_state() -> AppState {
    create_test_state(
        sample_pageviews(),
        StubLocation::resolving("KE"),
        JoinPolicy::AllOrNothing,
    )
}
