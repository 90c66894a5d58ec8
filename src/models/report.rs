//! Aggregated report models.
//!
//! This module contains the [`DayGroup`], [`EarningsSummary`] and
//! [`AnalysisReport`] types that the presentation layer consumes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayPeriodSummary, Record};

/// All records sharing one calendar date, with their combined payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayGroup {
    /// The calendar date shared by every record in the group.
    pub date: NaiveDate,
    /// The group's records, in input order.
    pub records: Vec<Record>,
    /// The sum of the records' amounts.
    pub total: Decimal,
}

/// Overall earnings metrics for one upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsSummary {
    /// The sum of every record's amount.
    pub total_earnings: Decimal,
    /// The number of distinct dates with at least one record.
    pub number_of_groups: usize,
    /// `total_earnings / number_of_groups`, or zero when there are no groups.
    pub average_earnings: Decimal,
    /// The earliest record date, if any.
    pub first_work_date: Option<NaiveDate>,
    /// The latest record date, if any.
    pub last_work_date: Option<NaiveDate>,
}

impl Default for EarningsSummary {
    fn default() -> Self {
        Self {
            total_earnings: Decimal::ZERO,
            number_of_groups: 0,
            average_earnings: Decimal::ZERO,
            first_work_date: None,
            last_work_date: None,
        }
    }
}

/// The complete result of analyzing one uploaded CSV.
///
/// The pay period is absent when no row carried a valid date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The CSV header row, used to label the per-day tables.
    pub headers: Vec<String>,
    /// Overall totals and averages.
    pub summary: EarningsSummary,
    /// The current pay period, if any records exist.
    pub pay_period: Option<PayPeriodSummary>,
    /// Per-day groups, most recent date first.
    pub groups: Vec<DayGroup>,
    /// The number of data rows read from the upload.
    pub rows_read: usize,
    /// The number of rows dropped for an unparsable `workDate`.
    pub rows_dropped: usize,
}

impl AnalysisReport {
    /// Returns `true` if no dated records survived parsing.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
