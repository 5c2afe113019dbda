//! Application error type and its HTTP rendering.
//!
//! JSON endpoints return errors in a uniform envelope:
//!
//! ```json
//! { "error": { "code": "upstream_error", "message": "...", "details": {} } }
//! ```
//!
//! HTML pages render the same [`AppError`] inside their template instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use validator::ValidationErrors;

use crate::domain::clients::ClientError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error description.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// An upstream API failed; the page cannot be built.
    #[error("{message}")]
    Upstream { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Upstream { .. } => "upstream_error",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Upstream { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Upstream { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            code: self.code(),
            message: self.message().to_string(),
            details: self.details().clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

/// Flattens validator errors into `{ "field": ["message", ...] }`.
pub fn validation_details(errors: &ValidationErrors) -> Value {
    let mut fields = Map::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<Value> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| Value::String(m.to_string()))
                    .unwrap_or_else(|| Value::String(e.code.to_string()))
            })
            .collect();
        fields.insert(field.to_string(), Value::Array(messages));
    }
    Value::Object(fields)
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", validation_details(&errors))
    }
}

impl From<ClientError> for AppError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::InvalidInput(reason) => {
                AppError::bad_request(reason, json!({}))
            }
            other => AppError::upstream(
                "Failed to fetch data from upstream API",
                json!({ "reason": other.to_string() }),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Country is required"))]
        country: String,
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::upstream("x", json!({})).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::not_found("x", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_validation_errors_carry_field_messages() {
        let probe = Probe {
            country: String::new(),
        };
        let err: AppError = probe.validate().unwrap_err().into();

        assert_eq!(err.code(), "validation_error");
        assert_eq!(err.details()["country"][0], "Country is required");
    }

    #[test]
    fn test_client_error_maps_to_upstream() {
        let err: AppError = ClientError::Decode("bad body".to_string()).into();
        assert!(matches!(err, AppError::Upstream { .. }));
        assert!(err.details()["reason"].as_str().unwrap().contains("bad body"));

        let err: AppError = ClientError::InvalidInput("bad code".to_string()).into();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_display_is_message() {
        let err = AppError::upstream("Failed to fetch", json!({}));
        assert_eq!(err.to_string(), "Failed to fetch");
    }
}
