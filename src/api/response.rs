//! Response types for the wage tracker API.
//!
//! This module defines the error response structures and maps crate errors
//! and extractor rejections onto HTTP status codes.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates an error response from a status and body.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// 401 for a request without the `x-user-id` header.
    pub fn missing_user() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ApiError::with_details(
                "MISSING_USER",
                "Missing x-user-id header",
                "Every request except /health and /calculate must identify its user",
            ),
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TrackerError> for ApiErrorResponse {
    fn from(error: TrackerError) -> Self {
        let message = error.to_string();
        match error {
            TrackerError::ConfigNotFound { .. } | TrackerError::ConfigParseError { .. } => {
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                )
            }
            TrackerError::MemberNotFound { id } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::with_details(
                    "MEMBER_NOT_FOUND",
                    message,
                    format!("No member has the id '{}'", id),
                ),
            ),
            TrackerError::GroupNotFound { id } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::with_details(
                    "GROUP_NOT_FOUND",
                    message,
                    format!("No group has the id '{}'", id),
                ),
            ),
            TrackerError::UserNotFound { .. } => ApiErrorResponse::new(
                StatusCode::UNAUTHORIZED,
                ApiError::new("UNKNOWN_USER", message),
            ),
            TrackerError::InactiveUser { .. } => ApiErrorResponse::new(
                StatusCode::FORBIDDEN,
                ApiError::new("INACTIVE_USER", message),
            ),
            TrackerError::Forbidden { .. } => ApiErrorResponse::new(
                StatusCode::FORBIDDEN,
                ApiError::new("FORBIDDEN", message),
            ),
            TrackerError::InvalidPeriod { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_PERIOD", message),
            ),
            TrackerError::InvalidAmount { .. } | TrackerError::InvalidField { .. } => {
                ApiErrorResponse::new(StatusCode::BAD_REQUEST, ApiError::validation_error(message))
            }
            TrackerError::UnknownAttendanceStatus { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "UNKNOWN_ATTENDANCE_STATUS",
                    message,
                    "Status must be one of: full, half, one_and_a_half, absent",
                ),
            ),
        }
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        let error = match rejection {
            JsonRejection::JsonDataError(err) => {
                let body_text = err.body_text();
                if body_text.contains("missing field") {
                    ApiError::validation_error(body_text)
                } else {
                    ApiError::malformed_json(body_text)
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
            }
            _ => ApiError::malformed_json("Failed to parse request body"),
        };
        ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
    }
}

impl From<QueryRejection> for ApiErrorResponse {
    fn from(rejection: QueryRejection) -> Self {
        ApiErrorResponse::new(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error(rejection.body_text()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_member_not_found_maps_to_404() {
        let response: ApiErrorResponse = TrackerError::MemberNotFound {
            id: "m404".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "MEMBER_NOT_FOUND");
        assert!(response.error.message.contains("m404"));
    }

    #[test]
    fn test_forbidden_maps_to_403() {
        let response: ApiErrorResponse = TrackerError::Forbidden {
            user_id: "staff1".to_string(),
            action: "set wages".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(response.error.code, "FORBIDDEN");
    }

    #[test]
    fn test_unknown_user_maps_to_401() {
        let response: ApiErrorResponse = TrackerError::UserNotFound {
            id: "ghost".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.error.code, "UNKNOWN_USER");
    }

    #[test]
    fn test_unknown_status_maps_to_400() {
        let response: ApiErrorResponse = TrackerError::UnknownAttendanceStatus {
            status: "triple".to_string(),
            member_id: "m1".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "UNKNOWN_ATTENDANCE_STATUS");
    }

    #[test]
    fn test_invalid_amount_is_validation_error() {
        let response: ApiErrorResponse = TrackerError::InvalidAmount {
            field: "payment".to_string(),
            amount: "0".to_string(),
            message: "must be greater than zero".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
    }
}
