//! HTTP request handlers for the Earnings Analyzer API.
//!
//! This module contains the handler functions for all endpoints:
//!
//! - `GET /` serves the upload form.
//! - `POST /report` accepts a multipart form upload and renders the report.
//! - `POST /analyze` accepts a raw CSV body and returns the report as JSON.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        DefaultBodyLimit, Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::analyze_csv;
use crate::render::{error_message, render_error_page, render_report, render_upload_page};

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Name of the multipart form field carrying the CSV file.
pub const UPLOAD_FIELD: &str = "file";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes();

    Router::new()
        .route("/", get(upload_page_handler))
        .route("/report", post(report_handler))
        .route("/analyze", post(analyze_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Handler for GET /.
async fn upload_page_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_upload_page(state.display()))
}

/// Handler for POST /report.
///
/// Renders either the complete report or a single error message, never
/// both.
async fn report_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report upload");

    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Rejected upload");
            return error_page(&state, StatusCode::BAD_REQUEST, &rejection.body_text());
        }
    };

    let upload = match read_upload(&mut multipart).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            warn!(correlation_id = %correlation_id, "Upload has no file field");
            return error_page(&state, StatusCode::BAD_REQUEST, &ApiError::missing_file().message);
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Failed to read upload");
            return error_page(&state, err.status(), &err.body_text());
        }
    };

    match analyze_csv(&upload) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                bytes = upload.len(),
                days = report.summary.number_of_groups,
                total_earnings = %report.summary.total_earnings,
                "Report rendered"
            );
            Html(render_report(&report, state.display())).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Analysis failed");
            let message = error_message(&err);
            let api_error: ApiErrorResponse = err.into();
            error_page(&state, api_error.status, &message)
        }
    }
}

/// Handler for POST /analyze.
///
/// Accepts the CSV as the raw request body and returns the analysis report.
async fn analyze_handler(body: Bytes) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, bytes = body.len(), "Processing analysis request");

    if body.is_empty() {
        warn!(correlation_id = %correlation_id, "Empty request body");
        return ApiErrorResponse::bad_request(ApiError::malformed_upload("Request body is empty"))
            .into_response();
    }

    match analyze_csv(&body) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                days = report.summary.number_of_groups,
                total_earnings = %report.summary.total_earnings,
                "Analysis completed successfully"
            );
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Analysis failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Returns the contents of the first `file` field, if any.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<Bytes>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            return Ok(Some(field.bytes().await?));
        }
    }
    Ok(None)
}

fn error_page(state: &AppState, status: StatusCode, message: &str) -> Response {
    (status, Html(render_error_page(state.display(), message))).into_response()
}
