//! Presentation adapter for the Earnings Analyzer.
//!
//! Renders an [`AnalysisReport`](crate::models::AnalysisReport) as a
//! standalone HTML page. Nothing in here computes; every number shown comes
//! from the report.

mod format;
mod html;

pub use format::{escape_html, format_currency, format_date};
pub use html::{error_message, render_error_page, render_report, render_upload_page};
