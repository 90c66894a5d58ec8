//! Pay period window models.
//!
//! This module contains the [`PayPeriodWindow`] and [`PayPeriodSummary`]
//! types describing the Tuesday-to-Monday accounting window.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of days in one pay period, inclusive of both ends.
pub const PAY_PERIOD_DAYS: i64 = 7;

/// A fixed 7-day pay period running from a Tuesday to the following Monday.
///
/// # Example
///
/// ```
/// use earnings_analyzer::models::PayPeriodWindow;
/// use chrono::NaiveDate;
///
/// // 2024-12-18 is a Wednesday
/// let window = PayPeriodWindow::containing(NaiveDate::from_ymd_opt(2024, 12, 18).unwrap());
/// assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 12, 17).unwrap());
/// assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 12, 23).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodWindow {
    /// The first day of the period (always a Tuesday, inclusive).
    pub start: NaiveDate,
    /// The last day of the period (always a Monday, inclusive).
    pub end: NaiveDate,
}

impl PayPeriodWindow {
    /// Returns the pay period that `date` belongs to.
    ///
    /// Tuesday through Sunday fall in the period that started on the most
    /// recent Tuesday. A Monday closes the period that started six days
    /// earlier, never the one about to begin.
    pub fn containing(date: NaiveDate) -> Self {
        let dow = i64::from(date.weekday().num_days_from_monday());
        let start = if dow >= 1 {
            date - Duration::days(dow - 1)
        } else {
            date - Duration::days(PAY_PERIOD_DAYS - 1)
        };

        Self {
            start,
            end: start + Duration::days(PAY_PERIOD_DAYS - 1),
        }
    }

    /// Checks if a given date falls within this window (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns the number of calendar days covered by the window.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Returns `true` if the window starts on a Tuesday and ends on a Monday.
    pub fn is_aligned(&self) -> bool {
        self.start.weekday() == Weekday::Tue && self.end.weekday() == Weekday::Mon
    }
}

/// The current pay period and the payouts that fall inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodSummary {
    /// The window anchored to the most recent record date.
    pub window: PayPeriodWindow,
    /// The sum of amounts for records inside the window.
    pub total: Decimal,
    /// The number of records inside the window.
    pub record_count: usize,
}
