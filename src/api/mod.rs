//! HTTP API module for the Earnings Analyzer.
//!
//! This module serves the upload-then-render cycle: an upload form, an
//! HTML report endpoint and a JSON analysis endpoint.

mod handlers;
mod response;
mod state;

pub use handlers::{UPLOAD_FIELD, create_router};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
