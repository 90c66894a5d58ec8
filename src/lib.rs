//! Earnings Analyzer for work-date/payout CSV exports
//!
//! This crate cleans and aggregates uploaded payout records into daily
//! totals, a daily average, and the current Tuesday-to-Monday pay period,
//! and serves the results over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
