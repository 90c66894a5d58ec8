//! End-to-end analysis of one uploaded CSV.

use std::time::Instant;

use tracing::info;

use crate::error::AnalyzerResult;
use crate::models::AnalysisReport;

use super::aggregation::aggregate;
use super::pay_period::calculate_pay_period;
use super::record_parser::parse_records;

/// Parses, aggregates and computes the current pay period for one upload.
///
/// The pay period is only calculated when at least one record has a valid
/// date; otherwise the report carries `pay_period: None` and zeroed
/// metrics.
///
/// # Errors
///
/// Propagates any error from [`parse_records`], and returns
/// [`AnalyzerError::AmountOverflow`](crate::error::AnalyzerError::AmountOverflow)
/// when payouts sum past the decimal range. No partial report is ever
/// returned.
///
/// # Example
///
/// ```
/// use earnings_analyzer::calculation::analyze_csv;
/// use rust_decimal::Decimal;
///
/// let csv = "workDate,payout\n\"Dec 18, 2024\",$40.00\n\"Dec 10, 2024\",$60.00\n";
/// let report = analyze_csv(csv.as_bytes()).unwrap();
///
/// assert_eq!(report.summary.total_earnings, Decimal::new(100, 0));
/// assert_eq!(report.pay_period.unwrap().total, Decimal::new(40, 0));
/// ```
pub fn analyze_csv(input: &[u8]) -> AnalyzerResult<AnalysisReport> {
    let start_time = Instant::now();

    let table = parse_records(input)?;
    let aggregation = aggregate(&table.records)?;

    let pay_period = if table.records.is_empty() {
        None
    } else {
        Some(calculate_pay_period(&table.records)?)
    };

    info!(
        rows_read = table.rows_read,
        rows_used = table.records.len(),
        rows_dropped = table.rows_dropped,
        days = aggregation.summary.number_of_groups,
        total_earnings = %aggregation.summary.total_earnings,
        duration_us = start_time.elapsed().as_micros(),
        "Analysis completed"
    );

    Ok(AnalysisReport {
        headers: table.headers,
        summary: aggregation.summary,
        pay_period,
        groups: aggregation.groups,
        rows_read: table.rows_read,
        rows_dropped: table.rows_dropped,
    })
}
