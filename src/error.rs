//! Error types for the Earnings Analyzer.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while analyzing an upload.

use thiserror::Error;

/// The main error type for the Earnings Analyzer.
///
/// Every failure aborts the analysis of the current upload; no partial
/// results are produced. Rows with an unparsable `workDate` are not errors
/// and never surface here.
///
/// # Example
///
/// ```
/// use earnings_analyzer::error::AnalyzerError;
///
/// let error = AnalyzerError::InvalidPayout {
///     line: 3,
///     value: "abc".to_string(),
///     message: "Invalid decimal: unknown character".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid payout 'abc' on line 3: Invalid decimal: unknown character"
/// );
/// ```
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// One or more required columns are absent from the CSV header.
    #[error(
        "The CSV file must contain 'workDate' and 'payout' columns (missing: {})",
        .columns.join(", ")
    )]
    MissingColumns {
        /// The required columns that were not found, in required order.
        columns: Vec<String>,
    },

    /// A payout cell could not be normalized into a decimal amount.
    #[error("Invalid payout '{value}' on line {line}: {message}")]
    InvalidPayout {
        /// The 1-based CSV line number of the offending row.
        line: usize,
        /// The raw cell text.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// The CSV input itself was malformed.
    #[error("Malformed CSV: {message}")]
    Csv {
        /// A description of the CSV error.
        message: String,
    },

    /// A running payout sum left the representable decimal range.
    #[error("Payout total overflowed while summing {context}")]
    AmountOverflow {
        /// Which sum overflowed (e.g. "total earnings").
        context: String,
    },

    /// A calculation that needs at least one record was given none.
    #[error("No dated records available")]
    EmptyData,

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl AnalyzerError {
    /// Returns `true` for errors caused by the header layout of the upload.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, AnalyzerError::MissingColumns { .. })
    }

    /// Returns `true` for errors caused by the content of the upload.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            AnalyzerError::InvalidPayout { .. }
                | AnalyzerError::Csv { .. }
                | AnalyzerError::AmountOverflow { .. }
        )
    }
}

impl From<csv::Error> for AnalyzerError {
    fn from(error: csv::Error) -> Self {
        AnalyzerError::Csv {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return AnalyzerError.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
