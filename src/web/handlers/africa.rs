//! Aggregation page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::api::dto::pagination::ArticlesQueryParams;
use crate::domain::entities::{AccessPlatform, ViewMode};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::view::{PageLinks, ResultsView, SelectOption, access_options};

/// Template for the aggregation page.
///
/// Renders `templates/africa.html` with:
/// - Date and access platform picker
/// - Gallery/list toggle
/// - One page of article cards or rows
/// - Numbered pagination with previous/next controls
#[derive(Template, WebTemplate)]
#[template(path = "africa.html")]
pub struct AfricaTemplate {
    pub heading: String,
    pub date: String,
    pub access_options: Vec<SelectOption>,
    pub results: Option<ResultsView>,
    pub error: Option<String>,
}

/// Renders the top articles of all configured countries.
///
/// # Endpoint
///
/// `GET /?date=&access=&view=&page=`
///
/// The default view is the gallery. A failed batch renders `Error: <message>`
/// with status 502 and no article.
pub async fn africa_handler(
    State(state): State<AppState>,
    Query(params): Query<ArticlesQueryParams>,
) -> impl IntoResponse {
    match render(&state, &params).await {
        Ok(template) => (StatusCode::OK, template),
        Err(e) => {
            let access = params.access.resolve().unwrap_or_default();
            let template = AfricaTemplate {
                heading: "Top articles in Africa".to_string(),
                date: params.date.clone().unwrap_or_default(),
                access_options: access_options(access),
                results: None,
                error: Some(e.message().to_string()),
            };
            (e.status_code(), template)
        }
    }
}

async fn render(
    state: &AppState,
    params: &ArticlesQueryParams,
) -> Result<AfricaTemplate, AppError> {
    let date = params.resolve_date()?;
    let access: AccessPlatform = params.access.resolve()?;
    let (view, page) = params.pagination.resolve(ViewMode::Gallery)?;

    let records = state.articles_service.continent_top(date, access).await?;

    let links = PageLinks::new("/", &format!("date={date}&access={access}"));

    Ok(AfricaTemplate {
        heading: format!("Top articles in Africa on {}", date.heading()),
        date: date.to_string(),
        access_options: access_options(access),
        results: Some(ResultsView::new(&records, view, page, &links)),
        error: None,
    })
}
