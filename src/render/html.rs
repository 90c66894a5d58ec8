//! HTML views: the upload form, the earnings report and the error page.

use crate::config::DisplayConfig;
use crate::error::AnalyzerError;
use crate::models::{AnalysisReport, DayGroup};

use super::format::{escape_html, format_currency, format_date};

/// Shown instead of a date range when no record carried a valid date.
const NO_DATED_RECORDS: &str = "No dated records";

/// One colored summary card.
struct Card<'a> {
    heading: &'a str,
    subtitle: String,
    value: String,
    background: &'a str,
    color: &'a str,
}

/// Renders the landing page with the upload form.
pub fn render_upload_page(display: &DisplayConfig) -> String {
    let mut body = upload_form();
    body.push_str(r#"<p class="info">Awaiting CSV file upload.</p>"#);
    page(display, &body)
}

/// Renders the upload form followed by a single error message.
pub fn render_error_page(display: &DisplayConfig, message: &str) -> String {
    let mut body = upload_form();
    body.push_str(&format!(
        r#"<div class="error" role="alert">{}</div>"#,
        escape_html(message)
    ));
    page(display, &body)
}

/// Returns the user-visible message for a failed upload.
pub fn error_message(error: &AnalyzerError) -> String {
    match error {
        AnalyzerError::MissingColumns { .. } => {
            "The CSV file must contain 'workDate' and 'payout' columns.".to_string()
        }
        other => format!("An error occurred while processing the file: {other}"),
    }
}

/// Renders the full report: three summary cards and one collapsible
/// section per work date.
pub fn render_report(report: &AnalysisReport, display: &DisplayConfig) -> String {
    let summary = &report.summary;

    let since = match (&display.earnings_since, summary.first_work_date) {
        (Some(label), _) => label.clone(),
        (None, Some(first)) => format!("From {}", format_date(first)),
        (None, None) => NO_DATED_RECORDS.to_string(),
    };

    let (period_range, period_total) = match &report.pay_period {
        Some(period) => (
            format!(
                "{} - {}",
                format_date(period.window.start),
                format_date(period.window.end)
            ),
            period.total,
        ),
        None => (NO_DATED_RECORDS.to_string(), rust_decimal::Decimal::ZERO),
    };

    let cards = [
        Card {
            heading: "Total Earnings",
            subtitle: since,
            value: format_currency(summary.total_earnings),
            background: "#d4edda",
            color: "#155724",
        },
        Card {
            heading: "Daily Average",
            subtitle: format!("Estimated on {} days", summary.number_of_groups),
            value: format_currency(summary.average_earnings),
            background: "#fff3cd",
            color: "#856404",
        },
        Card {
            heading: "This Pay Period",
            subtitle: period_range,
            value: format_currency(period_total),
            background: "#d3d3d3",
            color: "#4f4f4f",
        },
    ];

    let mut body = upload_form();

    body.push_str(r#"<div class="cards">"#);
    for card in &cards {
        body.push_str(&render_card(card));
    }
    body.push_str("</div>");

    if report.rows_dropped > 0 {
        body.push_str(&format!(
            r#"<p class="note">{} of {} rows skipped: unrecognized workDate</p>"#,
            report.rows_dropped, report.rows_read
        ));
    }

    body.push_str("<hr>");

    for group in &report.groups {
        body.push_str(&render_group(group, &report.headers));
    }

    page(display, &body)
}

fn render_card(card: &Card<'_>) -> String {
    format!(
        concat!(
            r#"<div class="card" style="background-color: {bg};">"#,
            r#"<h3 style="color: {fg};">{heading}</h3>"#,
            r#"<p class="subtitle" style="color: {fg};">{subtitle}</p>"#,
            r#"<p class="value" style="color: {fg};">{value}</p>"#,
            "</div>"
        ),
        bg = card.background,
        fg = card.color,
        heading = escape_html(card.heading),
        subtitle = escape_html(&card.subtitle),
        value = escape_html(&card.value),
    )
}

fn render_group(group: &DayGroup, headers: &[String]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<details><summary><strong>{}</strong> &nbsp; &nbsp; Earnings: {}</summary>",
        escape_html(&format_date(group.date)),
        escape_html(&format_currency(group.total))
    ));

    out.push_str("<table><thead><tr>");
    for header in headers {
        out.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    out.push_str("</tr></thead><tbody>");

    for record in &group.records {
        out.push_str("<tr>");
        // Pad short rows so every table stays rectangular.
        let width = headers.len().max(record.row.len());
        for idx in 0..width {
            let cell = record.row.get(idx).unwrap_or_default();
            out.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        out.push_str("</tr>");
    }

    out.push_str("</tbody></table></details>");
    out
}

fn upload_form() -> String {
    concat!(
        "<h2>Upload your CSV file</h2>",
        r#"<form method="post" action="/report" enctype="multipart/form-data">"#,
        r#"<input type="file" name="file" accept=".csv,text/csv" required> "#,
        r#"<button type="submit">Analyze</button>"#,
        "</form>"
    )
    .to_string()
}

fn page(display: &DisplayConfig, body: &str) -> String {
    let title = escape_html(&display.title);
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            "<title>{title}</title>",
            "<style>{style}</style>",
            "</head><body><h1>{title}</h1>{body}</body></html>\n"
        ),
        title = title,
        style = STYLE,
        body = body,
    )
}

const STYLE: &str = concat!(
    "body{font-family:sans-serif;margin:2rem;}",
    ".cards{display:flex;gap:1rem;}",
    ".card{flex:1;padding:20px;border-radius:5px;}",
    ".subtitle{font-size:15px;margin-top:-10px;}",
    ".value{font-size:24px;}",
    ".info{background:#e7f3fe;padding:1rem;border-radius:5px;}",
    ".error{background:#f8d7da;color:#721c24;padding:1rem;border-radius:5px;}",
    ".note{color:#6c757d;}",
    "details{margin:0.5rem 0;}",
    "table{border-collapse:collapse;margin-top:0.5rem;}",
    "th,td{border:1px solid #ccc;padding:4px 8px;text-align:left;}"
);
