//! Current pay period calculation.
//!
//! The current pay period is the Tuesday-to-Monday window that contains the
//! most recent record date. Payouts dated inside the window are summed.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::{PayPeriodSummary, PayPeriodWindow, Record};

use super::aggregation::checked_sum;

/// Returns the latest date across all records.
///
/// # Errors
///
/// Returns [`AnalyzerError::EmptyData`] if `records` is empty.
pub fn most_recent_date(records: &[Record]) -> AnalyzerResult<NaiveDate> {
    records
        .iter()
        .map(|r| r.date)
        .max()
        .ok_or(AnalyzerError::EmptyData)
}

/// Computes the current pay period window and its payout total.
///
/// Callers must guard against an empty record set; the analysis pipeline
/// skips this step entirely when nothing survived parsing.
///
/// # Errors
///
/// - [`AnalyzerError::EmptyData`] if `records` is empty.
/// - [`AnalyzerError::AmountOverflow`] if the window's total overflows.
///
/// # Example
///
/// ```
/// use earnings_analyzer::calculation::calculate_pay_period;
/// use earnings_analyzer::models::Record;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Monday 2024-12-16 closes the period that started Tuesday 2024-12-10.
/// let records = vec![
///     Record::new(NaiveDate::from_ymd_opt(2024, 12, 16).unwrap(), Decimal::new(30, 0)),
///     Record::new(NaiveDate::from_ymd_opt(2024, 12, 10).unwrap(), Decimal::new(20, 0)),
///     Record::new(NaiveDate::from_ymd_opt(2024, 12, 9).unwrap(), Decimal::new(10, 0)),
/// ];
///
/// let summary = calculate_pay_period(&records).unwrap();
/// assert_eq!(summary.window.start, NaiveDate::from_ymd_opt(2024, 12, 10).unwrap());
/// assert_eq!(summary.total, Decimal::new(50, 0));
/// ```
pub fn calculate_pay_period(records: &[Record]) -> AnalyzerResult<PayPeriodSummary> {
    let window = PayPeriodWindow::containing(most_recent_date(records)?);

    let (total, record_count) = records
        .iter()
        .filter(|r| window.contains_date(r.date))
        .try_fold((Decimal::ZERO, 0usize), |(total, count), r| {
            checked_sum(total, r.amount, "the pay period total").map(|total| (total, count + 1))
        })?;

    Ok(PayPeriodSummary {
        window,
        total,
        record_count,
    })
}
