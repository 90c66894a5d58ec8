//! Per-day grouping and overall earnings metrics.
//!
//! Grouping preserves the order in which dates first appear in the input.
//! Since the record parser emits records most recent first, groups come
//! out most recent first as well, without a second sort.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::{DayGroup, EarningsSummary, Record};

/// The groups and overall metrics derived from one record sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    /// Overall totals and averages.
    pub summary: EarningsSummary,
    /// Per-day groups in first-seen order.
    pub groups: Vec<DayGroup>,
}

/// Groups records by calendar date and computes the overall metrics.
///
/// An empty input yields an all-zero summary and no groups.
///
/// # Errors
///
/// Returns [`AnalyzerError::AmountOverflow`] if a group total or the overall
/// total leaves the decimal range.
///
/// # Example
///
/// ```
/// use earnings_analyzer::calculation::aggregate;
/// use earnings_analyzer::models::Record;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let dec17 = NaiveDate::from_ymd_opt(2024, 12, 17).unwrap();
/// let dec10 = NaiveDate::from_ymd_opt(2024, 12, 10).unwrap();
/// let records = vec![
///     Record::new(dec17, Decimal::new(10000, 2)),
///     Record::new(dec17, Decimal::new(5000, 2)),
///     Record::new(dec10, Decimal::new(20000, 2)),
/// ];
///
/// let aggregation = aggregate(&records).unwrap();
/// assert_eq!(aggregation.summary.total_earnings, Decimal::new(35000, 2));
/// assert_eq!(aggregation.summary.number_of_groups, 2);
/// assert_eq!(aggregation.summary.average_earnings, Decimal::new(17500, 2));
/// assert_eq!(aggregation.groups[0].date, dec17);
/// ```
pub fn aggregate(records: &[Record]) -> AnalyzerResult<Aggregation> {
    let groups = group_by_day(records)?;
    let summary = summarize(records, &groups)?;
    Ok(Aggregation { summary, groups })
}

/// Partitions records by date, keeping first-seen date order and the
/// original record order within each group.
///
/// # Errors
///
/// Returns [`AnalyzerError::AmountOverflow`] if a group total overflows.
pub fn group_by_day(records: &[Record]) -> AnalyzerResult<Vec<DayGroup>> {
    let mut groups: Vec<DayGroup> = Vec::new();
    let mut positions: HashMap<NaiveDate, usize> = HashMap::new();

    for record in records {
        let idx = *positions.entry(record.date).or_insert_with(|| {
            groups.push(DayGroup {
                date: record.date,
                records: Vec::new(),
                total: Decimal::ZERO,
            });
            groups.len() - 1
        });

        let group = &mut groups[idx];
        group.total = checked_sum(group.total, record.amount, "a daily total")?;
        group.records.push(record.clone());
    }

    Ok(groups)
}

/// Computes the total, distinct-day count and daily average.
///
/// # Errors
///
/// Returns [`AnalyzerError::AmountOverflow`] if the overall total overflows.
pub fn summarize(records: &[Record], groups: &[DayGroup]) -> AnalyzerResult<EarningsSummary> {
    let total_earnings = records.iter().try_fold(Decimal::ZERO, |total, r| {
        checked_sum(total, r.amount, "total earnings")
    })?;
    let number_of_groups = groups.len();

    // Dividing by a count of at least one cannot grow the magnitude.
    let average_earnings = if number_of_groups > 0 {
        total_earnings / Decimal::from(number_of_groups)
    } else {
        Decimal::ZERO
    };

    Ok(EarningsSummary {
        total_earnings,
        number_of_groups,
        average_earnings,
        first_work_date: records.iter().map(|r| r.date).min(),
        last_work_date: records.iter().map(|r| r.date).max(),
    })
}

/// Adds two amounts, reporting overflow instead of panicking.
pub(crate) fn checked_sum(
    total: Decimal,
    amount: Decimal,
    context: &str,
) -> AnalyzerResult<Decimal> {
    total
        .checked_add(amount)
        .ok_or_else(|| AnalyzerError::AmountOverflow {
            context: context.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(d: NaiveDate, cents: i64) -> Record {
        Record::new(d, Decimal::new(cents, 2))
    }

    #[test]
    fn test_reference_scenario() {
        let records = vec![
            record(date(2024, 12, 17), 10000),
            record(date(2024, 12, 17), 5000),
            record(date(2024, 12, 10), 20000),
        ];

        let aggregation = aggregate(&records).unwrap();

        assert_eq!(aggregation.summary.total_earnings, Decimal::new(35000, 2));
        assert_eq!(aggregation.summary.number_of_groups, 2);
        assert_eq!(aggregation.summary.average_earnings, Decimal::new(17500, 2));
        assert_eq!(aggregation.groups.len(), 2);
        assert_eq!(aggregation.groups[0].date, date(2024, 12, 17));
        assert_eq!(aggregation.groups[0].total, Decimal::new(15000, 2));
        assert_eq!(aggregation.groups[0].records.len(), 2);
        assert_eq!(aggregation.groups[1].date, date(2024, 12, 10));
        assert_eq!(aggregation.groups[1].total, Decimal::new(20000, 2));
    }

    #[test]
    fn test_groups_keep_first_seen_order_not_sorted_order() {
        let records = vec![
            record(date(2024, 12, 1), 100),
            record(date(2024, 12, 9), 100),
            record(date(2024, 12, 1), 100),
            record(date(2024, 12, 5), 100),
        ];

        let dates: Vec<NaiveDate> = group_by_day(&records)
            .unwrap()
            .iter()
            .map(|g| g.date)
            .collect();
        assert_eq!(
            dates,
            vec![date(2024, 12, 1), date(2024, 12, 9), date(2024, 12, 5)]
        );
    }

    #[test]
    fn test_empty_input_yields_zeros() {
        let aggregation = aggregate(&[]).unwrap();
        assert_eq!(aggregation.summary, EarningsSummary::default());
        assert!(aggregation.groups.is_empty());
    }

    #[test]
    fn test_negative_amounts_reduce_totals() {
        let records = vec![
            record(date(2024, 12, 17), 10000),
            record(date(2024, 12, 17), -2500),
        ];

        let aggregation = aggregate(&records).unwrap();
        assert_eq!(aggregation.summary.total_earnings, Decimal::new(7500, 2));
        assert_eq!(aggregation.groups[0].total, Decimal::new(7500, 2));
    }

    #[test]
    fn test_first_and_last_work_dates() {
        let records = vec![
            record(date(2024, 12, 17), 1),
            record(date(2024, 12, 7), 1),
            record(date(2024, 12, 10), 1),
        ];

        let summary = aggregate(&records).unwrap().summary;
        assert_eq!(summary.first_work_date, Some(date(2024, 12, 7)));
        assert_eq!(summary.last_work_date, Some(date(2024, 12, 17)));
    }

    #[test]
    fn test_average_of_uneven_split() {
        let records = vec![
            record(date(2024, 12, 17), 10000),
            record(date(2024, 12, 16), 0),
            record(date(2024, 12, 15), 0),
        ];

        let summary = aggregate(&records).unwrap().summary;
        let reconstructed = summary.average_earnings * Decimal::from(3);
        let diff = (reconstructed - summary.total_earnings).abs();
        assert!(diff < Decimal::new(1, 10), "diff too large: {diff}");
    }

    #[test]
    fn test_overflowing_daily_total_is_error() {
        let records = vec![
            Record::new(date(2024, 12, 17), Decimal::MAX),
            record(date(2024, 12, 17), 100),
        ];

        match aggregate(&records) {
            Err(AnalyzerError::AmountOverflow { context }) => {
                assert_eq!(context, "a daily total");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_overflowing_overall_total_is_error() {
        // Each day fits on its own; only the grand total overflows.
        let records = vec![
            Record::new(date(2024, 12, 17), Decimal::MAX),
            Record::new(date(2024, 12, 16), Decimal::MAX),
        ];

        let groups = group_by_day(&records).unwrap();
        assert_eq!(groups.len(), 2);
        assert!(matches!(
            summarize(&records, &groups),
            Err(AnalyzerError::AmountOverflow { .. })
        ));
    }

    #[test]
    fn test_extreme_amounts_that_cancel_out_are_fine() {
        let records = vec![
            Record::new(date(2024, 12, 17), Decimal::MAX),
            Record::new(date(2024, 12, 17), Decimal::MIN),
        ];

        let aggregation = aggregate(&records).unwrap();
        assert_eq!(aggregation.summary.total_earnings, Decimal::ZERO);
    }
}
