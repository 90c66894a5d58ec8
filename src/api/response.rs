//! Response types for the Earnings Analyzer API.
//!
//! This module defines the error response structures and the mapping from
//! [`AnalyzerError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;

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

    /// Creates the error returned when a form upload carries no `file` field.
    pub fn missing_file() -> Self {
        Self::with_details(
            "MISSING_FILE",
            "No CSV file was uploaded",
            "Expected a multipart form field named 'file'",
        )
    }

    /// Creates a malformed upload error response.
    pub fn malformed_upload(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_UPLOAD", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 Bad Request response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// Chooses the HTTP status for an analysis failure.
///
/// Header problems are the client's request shape (400); problems with the
/// file's content are unprocessable (422); everything else is ours (500).
fn status_for(error: &AnalyzerError) -> StatusCode {
    if error.is_schema_error() {
        StatusCode::BAD_REQUEST
    } else if error.is_format_error() || matches!(error, AnalyzerError::EmptyData) {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<AnalyzerError> for ApiErrorResponse {
    fn from(error: AnalyzerError) -> Self {
        let status = status_for(&error);
        let message = error.to_string();
        let error = match error {
            AnalyzerError::MissingColumns { columns } => ApiError::with_details(
                "MISSING_COLUMNS",
                message,
                format!("Missing required columns: {}", columns.join(", ")),
            ),
            AnalyzerError::InvalidPayout { line, .. } => ApiError::with_details(
                "INVALID_PAYOUT",
                message,
                format!("Fix the payout on line {line} and upload the file again"),
            ),
            AnalyzerError::Csv { .. } => ApiError::new("MALFORMED_CSV", message),
            AnalyzerError::AmountOverflow { .. } => ApiError::with_details(
                "AMOUNT_OVERFLOW",
                message,
                "Payouts in this file add up to more than can be represented",
            ),
            AnalyzerError::EmptyData => ApiError::new("EMPTY_DATA", message),
            AnalyzerError::ConfigNotFound { .. } | AnalyzerError::ConfigParseError { .. } => {
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message)
            }
        };

        ApiErrorResponse { status, error }
    }
}
