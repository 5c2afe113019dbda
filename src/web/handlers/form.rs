//! Request form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::application::submission::{FormErrors, SubmissionForm};
use crate::domain::countries;
use crate::domain::entities::{AccessPlatform, ReportDate};
use crate::error::validation_details;
use crate::state::AppState;
use crate::web::view::{SelectOption, access_options};

/// Shown when coordinates cannot be turned into a country.
const LOCATION_ERROR: &str = "Error fetching location data.";

/// Message shown above the form.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    /// Persistent notifications stay until dismissed; others fade out.
    pub persistent: bool,
}

/// Template for the request form.
///
/// Renders `templates/form.html` with:
/// - Continent and country pickers
/// - Date input (defaults to yesterday)
/// - Access platform select
/// - The one-shot geolocation script when `geolocate` is set
#[derive(Template, WebTemplate)]
#[template(path = "form.html")]
pub struct FormTemplate {
    pub continent_options: Vec<SelectOption>,
    pub country_options: Vec<SelectOption>,
    pub date: String,
    pub access_options: Vec<SelectOption>,
    pub errors: FormErrors,
    pub notification: Option<Notification>,
    pub geolocate: bool,
}

impl FormTemplate {
    fn new(continent: &str, country: &str, date: String, access: AccessPlatform) -> Self {
        Self {
            continent_options: continent_options(continent),
            country_options: country_options(continent, country),
            date,
            access_options: access_options(access),
            errors: FormErrors::default(),
            notification: None,
            geolocate: false,
        }
    }
}

/// Prefill parameters of the form page.
#[derive(Debug, Default, Deserialize)]
pub struct FormQuery {
    pub country: Option<String>,
    pub continent: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Renders the request form.
///
/// # Endpoint
///
/// `GET /form?country=&continent=&lat=&lon=`
///
/// `lat`/`lon` come from the browser's geolocation script and are resolved to a
/// country that overrides `country`. A failed lookup leaves `country` as
/// given and shows a persistent notification. Until coordinates arrive the page
/// runs the geolocation script once.
pub async fn form_handler(
    State(state): State<AppState>,
    Query(query): Query<FormQuery>,
) -> impl IntoResponse {
    let continent = query
        .continent
        .as_deref()
        .and_then(countries::continent)
        .map_or(countries::DEFAULT_CONTINENT, |c| c.name);

    let mut country = query
        .country
        .as_deref()
        .map(|c| c.trim().to_ascii_uppercase())
        .unwrap_or_default();
    let mut notification = None;

    let located = match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => {
            match state.location_service.locate(lat, lon).await {
                Ok(code) => country = code,
                Err(e) => {
                    tracing::debug!(error = %e, "Form geolocation failed");
                    notification = Some(Notification {
                        message: LOCATION_ERROR.to_string(),
                        persistent: true,
                    })
                }
            }
            true
        }
        _ => false,
    };

    let mut template = FormTemplate::new(
        continent,
        &country,
        ReportDate::yesterday().to_string(),
        AccessPlatform::default(),
    );
    template.notification = notification;
    template.geolocate = !located;
    template
}

/// Handles a request form submission.
///
/// # Endpoint
///
/// `POST /submit` (`application/x-www-form-urlencoded`)
///
/// # Response
///
/// - **303 See Other** to `/country/{code}?year=&month=&day=&access=` when valid
/// - **400 Bad Request** re-rendering the form with field messages otherwise
pub async fn submit_handler(Form(form): Form<SubmissionForm>) -> Response {
    let raw = form.normalized();

    match form.into_submission() {
        Ok(submission) => {
            tracing::info!(
                country = %submission.country,
                date = %submission.date,
                access = %submission.access,
                "Form submitted"
            );
            Redirect::to(&submission.country_view_path()).into_response()
        }
        Err(errors) => {
            tracing::debug!(details = %validation_details(&errors), "Form rejected");

            let continent = raw
                .continent
                .as_deref()
                .and_then(countries::continent)
                .map_or(countries::DEFAULT_CONTINENT, |c| c.name);
            let access = raw
                .access
                .as_deref()
                .and_then(|a| a.parse().ok())
                .unwrap_or_default();

            let mut template = FormTemplate::new(
                continent,
                &raw.country.to_ascii_uppercase(),
                raw.date,
                access,
            );
            template.errors = FormErrors::from_validation(&errors);
            template.notification = template.errors.notification().map(|message| Notification {
                message: message.to_string(),
                persistent: false,
            });

            (StatusCode::BAD_REQUEST, template).into_response()
        }
    }
}

fn continent_options(selected: &str) -> Vec<SelectOption> {
    countries::continents()
        .iter()
        .map(|continent| SelectOption {
            value: continent.name.to_string(),
            label: continent.name.to_string(),
            selected: continent.name == selected,
        })
        .collect()
}

/// Countries of `continent`, with `selected` marked.
///
/// A selected code outside the continent (e.g. from geolocation) is appended so
/// the picker still shows it.
fn country_options(continent: &str, selected: &str) -> Vec<SelectOption> {
    let catalog = countries::continent(continent).map_or(countries::AFRICA, |c| c.countries);

    let mut options: Vec<SelectOption> = catalog
        .iter()
        .map(|country| SelectOption {
            value: country.code.to_string(),
            label: country.name.to_string(),
            selected: country.code == selected,
        })
        .collect();

    if !selected.is_empty() && !options.iter().any(|option| option.selected) {
        options.push(SelectOption {
            value: selected.to_string(),
            label: countries::country_name(selected),
            selected: true,
        });
    }

    options
}
