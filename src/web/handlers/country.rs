//! Country result page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::api::dto::pagination::CountryQueryParams;
use crate::domain::countries;
use crate::domain::entities::ViewMode;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::view::{PageLinks, ResultsView};

/// Template for a single country's results.
///
/// Renders `templates/country.html`, the landing page of a form submission.
#[derive(Template, WebTemplate)]
#[template(path = "country.html")]
pub struct CountryTemplate {
    pub heading: String,
    pub subheading: String,
    pub results: Option<ResultsView>,
    pub error: Option<String>,
}

/// Renders the top articles of one country.
///
/// # Endpoint
///
/// `GET /country/{code}?year=&month=&day=&access=&view=&page=`
///
/// The default view is the list.
pub async fn country_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<CountryQueryParams>,
) -> impl IntoResponse {
    let code = code.to_ascii_uppercase();

    match render(&state, &code, &params).await {
        Ok(template) => (StatusCode::OK, template),
        Err(e) => {
            let template = CountryTemplate {
                heading: format!("Top articles in {}", countries::country_name(&code)),
                subheading: String::new(),
                results: None,
                error: Some(e.message().to_string()),
            };
            (e.status_code(), template)
        }
    }
}

async fn render(
    state: &AppState,
    code: &str,
    params: &CountryQueryParams,
) -> Result<CountryTemplate, AppError> {
    let date = params.resolve_date()?;
    let access = params.access.resolve()?;
    let (view, page) = params.pagination.resolve(ViewMode::List)?;

    let records = state
        .articles_service
        .country_top(code, date, access)
        .await?;

    let links = PageLinks::new(
        &format!("/country/{code}"),
        &format!(
            "year={}&month={}&day={}&access={access}",
            date.year(),
            date.month(),
            date.day()
        ),
    );

    Ok(CountryTemplate {
        heading: format!(
            "Top articles in {} on {}",
            countries::country_name(code),
            date.heading()
        ),
        subheading: format!("Access platform: {access}"),
        results: Some(ResultsView::new(&records, view, page, &links)),
        error: None,
    })
}
