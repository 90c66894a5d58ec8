//! Core data models for the Earnings Analyzer.
//!
//! This module contains all the domain models used throughout the analyzer.

mod pay_period;
mod record;
mod report;

pub use pay_period::{PAY_PERIOD_DAYS, PayPeriodSummary, PayPeriodWindow};
pub use record::{RawRow, Record};
pub use report::{AnalysisReport, DayGroup, EarningsSummary};
