//! Calculation logic for the Earnings Analyzer.
//!
//! This module contains the record parser (date and currency
//! normalization), the per-day aggregator, the Tuesday-to-Monday pay period
//! calculator, and the pipeline that chains them for one upload.

mod aggregation;
mod pay_period;
mod pipeline;
mod record_parser;

pub use aggregation::{Aggregation, aggregate, group_by_day, summarize};
pub use pay_period::{calculate_pay_period, most_recent_date};
pub use pipeline::analyze_csv;
pub use record_parser::{
    PAYOUT_COLUMN, ParsedTable, WORK_DATE_COLUMN, WORK_DATE_FORMAT, normalize_payout,
    parse_records, parse_work_date,
};
