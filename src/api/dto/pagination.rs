//! Query parameters shared by the result pages.

use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::{AccessPlatform, ReportDate, ViewMode};
use crate::error::AppError;

/// Pagination and view-mode query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers,
/// which keeps `#[serde(flatten)]` working.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default)]
    pub view: Option<String>,
}

impl PaginationParams {
    /// Validates the parameters.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `view`: `default_view`
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - View must be `gallery` or `list`
    ///
    /// Pages past the last one are accepted and yield an empty page.
    pub fn resolve(&self, default_view: ViewMode) -> Result<(ViewMode, u32), AppError> {
        let page = self.page.unwrap_or(1);
        if page == 0 {
            return Err(AppError::bad_request(
                "Page must be greater than 0",
                json!({ "page": page }),
            ));
        }

        let view = match self.view.as_deref().map(str::trim) {
            None | Some("") => default_view,
            Some("gallery") => ViewMode::Gallery,
            Some("list") => ViewMode::List,
            Some(other) => {
                return Err(AppError::bad_request(
                    "View must be 'gallery' or 'list'",
                    json!({ "view": other }),
                ));
            }
        };

        Ok((view, page))
    }
}

/// Access platform filter.
#[derive(Debug, Default, Deserialize)]
pub struct AccessParam {
    #[serde(default)]
    pub access: Option<String>,
}

impl AccessParam {
    /// The requested platform, `all-access` when absent or empty.
    pub fn resolve(&self) -> Result<AccessPlatform, AppError> {
        match self.access.as_deref().map(str::trim) {
            None | Some("") => Ok(AccessPlatform::default()),
            Some(raw) => raw
                .parse::<AccessPlatform>()
                .map_err(|e| AppError::bad_request(e.to_string(), json!({ "access": raw }))),
        }
    }
}

/// Query parameters of the aggregation view (`GET /` and `GET /api/articles`).
#[derive(Debug, Default, Deserialize)]
pub struct ArticlesQueryParams {
    /// `YYYY-MM-DD`; yesterday when absent.
    #[serde(default)]
    pub date: Option<String>,

    #[serde(flatten)]
    pub access: AccessParam,

    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl ArticlesQueryParams {
    pub fn resolve_date(&self) -> Result<ReportDate, AppError> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(ReportDate::yesterday()),
            Some(raw) => raw
                .parse::<ReportDate>()
                .map_err(|e| AppError::bad_request(e.to_string(), json!({ "date": raw }))),
        }
    }
}

/// Query parameters of the country view, where the date comes split in parts.
#[derive(Debug, Default, Deserialize)]
pub struct CountryQueryParams {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub day: Option<String>,

    #[serde(flatten)]
    pub access: AccessParam,

    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl CountryQueryParams {
    /// The date from `year`/`month`/`day`; yesterday when all three are absent.
    pub fn resolve_date(&self) -> Result<ReportDate, AppError> {
        match (&self.year, &self.month, &self.day) {
            (None, None, None) => Ok(ReportDate::yesterday()),
            (Some(y), Some(m), Some(d)) => ReportDate::from_parts(y, m, d).map_err(|e| {
                AppError::bad_request(e.to_string(), json!({ "year": y, "month": m, "day": d }))
            }),
            _ => Err(AppError::bad_request(
                "year, month and day must be given together",
                json!({}),
            )),
        }
    }
}
