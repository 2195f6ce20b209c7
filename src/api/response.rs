//! Response types for the Payroll Simulation Engine API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

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

    /// Creates an unsupported country error response.
    pub fn unsupported_country(country: &str) -> Self {
        Self::with_details(
            "UNSUPPORTED_COUNTRY",
            format!("No payroll rules available for country '{}'", country),
            "Supported countries are listed at /api/simulation/countries",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(error.to_string()),
            },
            EngineError::UnsupportedCountry { country } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::unsupported_country(&country),
            },
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidRuleSet { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Payroll rules are misconfigured",
                    error.to_string(),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let response: ApiErrorResponse =
            EngineError::invalid_input("grossSalary", "is required").into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
        assert_eq!(
            response.error.message,
            "Invalid input 'grossSalary': is required"
        );
    }

    #[test]
    fn test_unsupported_country_maps_to_bad_request() {
        let response: ApiErrorResponse = EngineError::UnsupportedCountry {
            country: "France".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "UNSUPPORTED_COUNTRY");
        assert!(response.error.message.contains("France"));
    }

    #[test]
    fn test_config_errors_map_to_internal_error() {
        let response: ApiErrorResponse = EngineError::InvalidRuleSet {
            country: "BJ".to_string(),
            message: "broken".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
        assert_eq!(
            response.error.details.as_deref(),
            Some("Invalid rule set for 'BJ': broken")
        );
    }

    #[tokio::test]
    async fn test_into_response_writes_status_and_json_body() {
        let response = ApiErrorResponse::from(EngineError::UnsupportedCountry {
            country: "France".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "UNSUPPORTED_COUNTRY");
    }

    #[test]
    fn test_status_follows_caller_error_classification() {
        let errors = [
            EngineError::invalid_input("grossSalary", "must not be negative"),
            EngineError::UnsupportedCountry {
                country: "France".to_string(),
            },
            EngineError::ConfigNotFound {
                path: "rules".to_string(),
            },
            EngineError::ConfigParseError {
                path: "rules/benin.yaml".to_string(),
                message: "bad".to_string(),
            },
        ];

        for error in errors {
            let caller_error = error.is_caller_error();
            let response = ApiErrorResponse::from(error);
            assert_eq!(response.status.is_client_error(), caller_error);
            assert_eq!(response.status.is_server_error(), !caller_error);
        }
    }
}
