//! Record model and raw row passthrough.
//!
//! This module defines the [`RawRow`] and [`Record`] types produced by the
//! record parser.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The untyped cells of one CSV row, in header order.
///
/// Columns other than `workDate` and `payout` are never interpreted; they
/// are carried so the per-day breakdown can show the row as uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow {
    cells: Vec<String>,
}

impl RawRow {
    /// Creates a raw row from its cells.
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Returns the cell at `index`, or `None` for a short row.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Returns all cells of the row.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Returns the number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RawRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A typed work record: the calendar date worked and the amount paid.
///
/// Negative amounts are allowed and pass through every calculation
/// unchanged.
///
/// # Example
///
/// ```
/// use earnings_analyzer::models::{RawRow, Record};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = Record {
///     date: NaiveDate::from_ymd_opt(2024, 12, 17).unwrap(),
///     amount: Decimal::new(10050, 2),
///     row: ["Dec 17, 2024", "$100.50"].into_iter().collect::<RawRow>(),
/// };
/// assert_eq!(record.amount.to_string(), "100.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The calendar date of the work.
    pub date: NaiveDate,
    /// The normalized payout amount.
    pub amount: Decimal,
    /// The row as it appeared in the upload.
    pub row: RawRow,
}

impl Record {
    /// Creates a record without any passthrough cells.
    pub fn new(date: NaiveDate, amount: Decimal) -> Self {
        Self {
            date,
            amount,
            row: RawRow::default(),
        }
    }
}
