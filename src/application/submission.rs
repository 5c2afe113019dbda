//! Request form validation.
//!
//! The same rules back the HTML form (`POST /submit`) and the JSON endpoint
//! (`POST /api/submissions`): country and date are required, the date must be
//! a real `YYYY-MM-DD` day, and the access platform must be one of the four
//! Wikimedia categories (empty means `all-access`).

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::{AccessPlatform, ReportDate, Submission};

static COUNTRY_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}$").expect("valid country code regex"));

/// Raw request form input, as posted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SubmissionForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Country is required"))]
    #[validate(custom(function = "validate_country_code"))]
    pub country: String,

    #[serde(default)]
    pub continent: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "Date is required"))]
    #[validate(custom(function = "validate_date"))]
    pub date: String,

    #[serde(default)]
    #[validate(custom(function = "validate_access"))]
    pub access: Option<String>,
}

fn validate_country_code(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || COUNTRY_CODE_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("country_code")
            .with_message("Country must be a two-letter ISO code".into()))
    }
}

fn validate_date(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.parse::<ReportDate>().is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("date_format").with_message("Date must be YYYY-MM-DD".into()))
    }
}

fn validate_access(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.parse::<AccessPlatform>().is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("access").with_message("Unknown access platform".into()))
    }
}

fn field_error(field: &'static str, code: &'static str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, ValidationError::new(code));
    errors
}

/// First message per form field, ready for field-level display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub country: Option<String>,
    pub date: Option<String>,
    pub access: Option<String>,
}

impl FormErrors {
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let first = |field: &str| {
            errors
                .field_errors()
                .get(field)
                .and_then(|list| list.first())
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
        };

        Self {
            country: first("country"),
            date: first("date"),
            access: first("access"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.date.is_none() && self.access.is_none()
    }

    /// Message for the transient notification shown next to the field errors.
    pub fn notification(&self) -> Option<&str> {
        self.date
            .as_deref()
            .or(self.country.as_deref())
            .or(self.access.as_deref())
    }
}

impl SubmissionForm {
    /// Copy with surrounding whitespace removed from every field.
    pub fn normalized(&self) -> Self {
        Self {
            country: self.country.trim().to_string(),
            continent: self.continent.as_ref().map(|c| c.trim().to_string()),
            date: self.date.trim().to_string(),
            access: self.access.as_ref().map(|a| a.trim().to_string()),
        }
    }

    /// Validates the form and produces the normalized [`Submission`].
    ///
    /// # Errors
    ///
    /// Returns the validator errors when a field is missing or malformed.
    pub fn into_submission(self) -> Result<Submission, ValidationErrors> {
        let form = self.normalized();
        form.validate()?;

        let date = form
            .date
            .parse::<ReportDate>()
            .map_err(|_| field_error("date", "date_format"))?;
        let access = match form.access.as_deref() {
            None | Some("") => AccessPlatform::default(),
            Some(raw) => raw.parse().map_err(|_| field_error("access", "access"))?,
        };

        Ok(Submission::new(
            form.country.to_ascii_uppercase(),
            date,
            access,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(country: &str, date: &str, access: Option<&str>) -> SubmissionForm {
        SubmissionForm {
            country: country.to_string(),
            continent: Some("Africa".to_string()),
            date: date.to_string(),
            access: access.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_submission_decomposes_date() {
        let submission = form("cd", "2024-03-02", Some("desktop"))
            .into_submission()
            .unwrap();

        assert_eq!(submission.country, "CD");
        assert_eq!(submission.year(), "2024");
        assert_eq!(submission.month(), "03");
        assert_eq!(submission.day(), "02");
        assert_eq!(submission.access, AccessPlatform::Desktop);
    }

    #[test]
    fn test_empty_access_defaults_to_all_access() {
        let submission = form("KE", "2024-03-02", Some("")).into_submission().unwrap();
        assert_eq!(submission.access, AccessPlatform::AllAccess);

        let submission = form("KE", "2024-03-02", None).into_submission().unwrap();
        assert_eq!(submission.access, AccessPlatform::AllAccess);
    }

    #[test]
    fn test_empty_country_is_rejected() {
        let errors = form("", "2024-03-02", None).into_submission().unwrap_err();
        let fields = FormErrors::from_validation(&errors);

        assert_eq!(fields.country.as_deref(), Some("Country is required"));
        assert!(fields.date.is_none());
        assert_eq!(fields.notification(), Some("Country is required"));
    }

    #[test]
    fn test_empty_date_is_rejected() {
        let errors = form("KE", "   ", None).into_submission().unwrap_err();
        let fields = FormErrors::from_validation(&errors);

        assert_eq!(fields.date.as_deref(), Some("Date is required"));
        assert!(fields.country.is_none());
    }

    #[test]
    fn test_both_missing_reports_both_fields() {
        let errors = form("", "", None).into_submission().unwrap_err();
        let fields = FormErrors::from_validation(&errors);

        assert!(fields.country.is_some());
        assert!(fields.date.is_some());
        assert_eq!(fields.notification(), Some("Date is required"));
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        let errors = form("Kenya", "02/03/2024", Some("tablet"))
            .into_submission()
            .unwrap_err();
        let fields = FormErrors::from_validation(&errors);

        assert_eq!(
            fields.country.as_deref(),
            Some("Country must be a two-letter ISO code")
        );
        assert_eq!(fields.date.as_deref(), Some("Date must be YYYY-MM-DD"));
        assert_eq!(fields.access.as_deref(), Some("Unknown access platform"));
    }

    #[test]
    fn test_form_errors_empty() {
        assert!(FormErrors::default().is_empty());
        assert!(FormErrors::default().notification().is_none());
    }
}
