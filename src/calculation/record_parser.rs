//! CSV record parsing and normalization.
//!
//! This module turns an uploaded CSV into typed [`Record`]s. The two
//! required columns are cleaned with deliberately different policies:
//!
//! - `payout`: `$` and `,` are stripped before parsing; an unparsable value
//!   aborts the whole upload.
//! - `workDate`: parsed with the fixed `"%b %d, %Y"` format (e.g.
//!   `"Dec 17, 2024"`); a row whose date does not match is silently
//!   dropped.

use std::io;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::{RawRow, Record};

/// Name of the column holding the work date.
pub const WORK_DATE_COLUMN: &str = "workDate";

/// Name of the column holding the payout amount.
pub const PAYOUT_COLUMN: &str = "payout";

/// The only accepted `workDate` layout, e.g. `"Dec 17, 2024"`.
pub const WORK_DATE_FORMAT: &str = "%b %d, %Y";

/// Records extracted from one CSV upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    /// The header row, with any UTF-8 BOM removed.
    pub headers: Vec<String>,
    /// Records with a valid date, most recent first.
    pub records: Vec<Record>,
    /// The number of data rows read.
    pub rows_read: usize,
    /// The number of rows dropped for an unparsable `workDate`.
    pub rows_dropped: usize,
}

/// Positions of the required columns within the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    work_date: usize,
    payout: usize,
}

/// Parses CSV input into date-descending records.
///
/// # Errors
///
/// - [`AnalyzerError::MissingColumns`] if `workDate` or `payout` is absent
///   from the header (exact, case-sensitive match).
/// - [`AnalyzerError::InvalidPayout`] if any row's payout cannot be
///   normalized, even when that row's date is invalid.
/// - [`AnalyzerError::Csv`] if the input is not readable CSV.
///
/// # Example
///
/// ```
/// use earnings_analyzer::calculation::parse_records;
/// use rust_decimal::Decimal;
///
/// let csv = "workDate,payout\n\"Dec 10, 2024\",$200.00\n\"Dec 17, 2024\",\"$1,000.00\"\n";
/// let table = parse_records(csv.as_bytes()).unwrap();
///
/// assert_eq!(table.records.len(), 2);
/// assert_eq!(table.records[0].amount, Decimal::new(100000, 2)); // Dec 17 first
/// ```
pub fn parse_records<R: io::Read>(input: R) -> AnalyzerResult<ParsedTable> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);

    let headers = normalize_headers(reader.headers()?);
    let columns = locate_columns(&headers)?;

    let mut records = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_dropped = 0usize;

    for (idx, result) in reader.records().enumerate() {
        let row = result?;
        rows_read += 1;

        // Header is line 1; fall back to that when the reader has no position.
        let line = row
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);

        let payout = row.get(columns.payout).unwrap_or_default();
        let amount = normalize_payout(payout).map_err(|message| AnalyzerError::InvalidPayout {
            line,
            value: payout.to_string(),
            message,
        })?;

        let raw_date = row.get(columns.work_date).unwrap_or_default();
        match parse_work_date(raw_date) {
            Some(date) => records.push(Record {
                date,
                amount,
                row: to_raw_row(&row),
            }),
            None => {
                debug!(line, work_date = %raw_date, "Dropping row with unparsable workDate");
                rows_dropped += 1;
            }
        }
    }

    // Stable, so rows sharing a date keep their file order.
    records.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(ParsedTable {
        headers,
        records,
        rows_read,
        rows_dropped,
    })
}

/// Normalizes a payout cell into a decimal amount.
///
/// Every `$` and `,` is removed and surrounding whitespace is trimmed. Plain
/// and scientific notation are accepted. A blank cell is a missing value
/// and normalizes to zero.
///
/// # Example
///
/// ```
/// use earnings_analyzer::calculation::normalize_payout;
/// use rust_decimal::Decimal;
///
/// assert_eq!(normalize_payout("$1,234.50").unwrap(), Decimal::new(123450, 2));
/// assert_eq!(normalize_payout("1234.50").unwrap(), Decimal::new(123450, 2));
/// assert!(normalize_payout("twelve").is_err());
/// ```
pub fn normalize_payout(raw: &str) -> Result<Decimal, String> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .map_err(|e| e.to_string())
}

/// Parses a `workDate` cell, returning `None` if it does not match
/// [`WORK_DATE_FORMAT`] with a four-digit year.
pub fn parse_work_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    // `%Y` alone would take "24" as year 24.
    let year = raw.split_whitespace().next_back()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(raw, WORK_DATE_FORMAT).ok()
}

fn normalize_headers(headers: &StringRecord) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            if idx == 0 {
                name.trim_start_matches('\u{feff}').to_string()
            } else {
                name.to_string()
            }
        })
        .collect()
}

fn locate_columns(headers: &[String]) -> AnalyzerResult<ColumnIndex> {
    let find = |name: &str| headers.iter().position(|h| h == name);

    match (find(WORK_DATE_COLUMN), find(PAYOUT_COLUMN)) {
        (Some(work_date), Some(payout)) => Ok(ColumnIndex { work_date, payout }),
        (work_date, payout) => {
            let mut columns = Vec::new();
            if work_date.is_none() {
                columns.push(WORK_DATE_COLUMN.to_string());
            }
            if payout.is_none() {
                columns.push(PAYOUT_COLUMN.to_string());
            }
            Err(AnalyzerError::MissingColumns { columns })
        }
    }
}

fn to_raw_row(row: &StringRecord) -> RawRow {
    row.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn parse(csv: &str) -> AnalyzerResult<ParsedTable> {
        parse_records(csv.as_bytes())
    }

    #[test]
    fn test_currency_strings_normalize_to_same_amount() {
        let expected = Decimal::new(123450, 2);
        assert_eq!(normalize_payout("$1,234.50").unwrap(), expected);
        assert_eq!(normalize_payout("1234.50").unwrap(), expected);
        assert_eq!(normalize_payout(" $1,234.50 ").unwrap(), expected);
    }

    #[test]
    fn test_negative_payout_passes_through() {
        assert_eq!(normalize_payout("-$5.25").unwrap(), Decimal::new(-525, 2));
        assert_eq!(normalize_payout("$-5.25").unwrap(), Decimal::new(-525, 2));
    }

    #[test]
    fn test_scientific_payout_is_accepted() {
        assert_eq!(normalize_payout("1.5e2").unwrap(), Decimal::new(150, 0));
    }

    #[test]
    fn test_blank_payout_is_zero() {
        assert_eq!(normalize_payout("").unwrap(), Decimal::ZERO);
        assert_eq!(normalize_payout("  $ ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_garbage_payout_is_rejected() {
        assert!(normalize_payout("12.5 USD").is_err());
        assert!(normalize_payout("abc").is_err());
    }

    #[test]
    fn test_payouts_outside_decimal_range_are_rejected() {
        assert_eq!(normalize_payout("1.5e2").unwrap(), Decimal::new(150, 0));
        assert!(normalize_payout("1e30").is_err());
        assert!(normalize_payout("nan").is_err());
        assert!(normalize_payout("inf").is_err());
    }

    #[test]
    fn test_parse_work_date_accepts_fixed_format() {
        assert_eq!(parse_work_date("Dec 17, 2024"), Some(date(2024, 12, 17)));
        assert_eq!(parse_work_date("Dec 7, 2024"), Some(date(2024, 12, 7)));
        assert_eq!(parse_work_date(" Jan 02, 2025 "), Some(date(2025, 1, 2)));
    }

    #[test]
    fn test_parse_work_date_rejects_other_formats() {
        assert_eq!(parse_work_date("2024-12-17"), None);
        assert_eq!(parse_work_date("17/12/2024"), None);
        assert_eq!(parse_work_date("Feb 30, 2024"), None);
        assert_eq!(parse_work_date("Dec 17, 24"), None);
        assert_eq!(parse_work_date(""), None);
    }

    #[test]
    fn test_parse_work_date_requires_four_digit_year() {
        assert_eq!(parse_work_date("Dec 17, 202"), None);
        assert_eq!(parse_work_date("Dec 17, 02024"), None);
        assert_eq!(parse_work_date("Dec 17, +2024"), None);
        assert_eq!(parse_work_date("Dec 17, 2024 "), Some(date(2024, 12, 17)));
    }

    #[test]
    fn test_records_sorted_by_date_descending() {
        let table = parse(
            "workDate,payout\n\
             \"Dec 10, 2024\",$200.00\n\
             \"Dec 17, 2024\",$100.00\n\
             \"Dec 12, 2024\",$50.00\n",
        )
        .unwrap();

        let dates: Vec<NaiveDate> = table.records.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 12, 17), date(2024, 12, 12), date(2024, 12, 10)]
        );
    }

    #[test]
    fn test_equal_dates_keep_file_order() {
        let table = parse(
            "workDate,payout,task\n\
             \"Dec 17, 2024\",$1,first\n\
             \"Dec 18, 2024\",$2,other\n\
             \"Dec 17, 2024\",$3,second\n",
        )
        .unwrap();

        let tasks: Vec<&str> = table
            .records
            .iter()
            .filter_map(|r| r.row.get(2))
            .collect();
        assert_eq!(tasks, vec!["other", "first", "second"]);
    }

    #[test]
    fn test_invalid_dates_are_dropped_not_fatal() {
        let table = parse(
            "workDate,payout\n\
             \"Dec 17, 2024\",$100.00\n\
             not a date,$999.00\n\
             2024-12-18,$5.00\n",
        )
        .unwrap();

        assert_eq!(table.rows_read, 3);
        assert_eq!(table.rows_dropped, 2);
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].amount, Decimal::new(10000, 2));
    }

    #[test]
    fn test_bad_payout_aborts_even_on_dropped_row() {
        let err = parse(
            "workDate,payout\n\
             \"Dec 17, 2024\",$100.00\n\
             not a date,lots\n",
        )
        .unwrap_err();

        match err {
            AnalyzerError::InvalidPayout { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_columns_reports_each_absent_column() {
        let err = parse("date,amount\nDec 17 2024,1\n").unwrap_err();
        match err {
            AnalyzerError::MissingColumns { columns } => {
                assert_eq!(columns, vec!["workDate", "payout"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_column_match_is_case_sensitive() {
        let err = parse("workdate,payout\n\"Dec 17, 2024\",1\n").unwrap_err();
        match err {
            AnalyzerError::MissingColumns { columns } => assert_eq!(columns, vec!["workDate"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bom_prefixed_header_is_matched() {
        let table = parse("\u{feff}workDate,payout\n\"Dec 17, 2024\",$1.00\n").unwrap();
        assert_eq!(table.headers[0], "workDate");
        assert_eq!(table.records.len(), 1);
    }

    #[test]
    fn test_columns_may_appear_in_any_order_with_extras() {
        let table = parse(
            "id,payout,project,workDate\n\
             7,\"$1,000.25\",atlas,\"Dec 17, 2024\"\n",
        )
        .unwrap();

        let record = &table.records[0];
        assert_eq!(record.date, date(2024, 12, 17));
        assert_eq!(record.amount, Decimal::new(100025, 2));
        assert_eq!(record.row.cells(), ["7", "$1,000.25", "atlas", "Dec 17, 2024"]);
    }

    #[test]
    fn test_short_row_without_date_is_dropped() {
        let table = parse("payout,workDate\n$4.00\n").unwrap();
        assert_eq!(table.rows_read, 1);
        assert_eq!(table.rows_dropped, 1);
        assert!(table.records.is_empty());
    }

    #[test]
    fn test_header_only_input_yields_no_records() {
        let table = parse("workDate,payout\n").unwrap();
        assert_eq!(table.rows_read, 0);
        assert!(table.records.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_csv_error() {
        let input: &[u8] = b"workDate,payout\n\"Dec 17, 2024\",\xff\xfe\n";
        let err = parse_records(input).unwrap_err();
        assert!(matches!(err, AnalyzerError::Csv { .. }));
    }
}
