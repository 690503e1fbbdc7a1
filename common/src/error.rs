//! Error types for fxrates.

use crate::{CurrencyPair, Timestamp};
use thiserror::Error;

/// Errors surfaced by rate store operations.
///
/// Missing data is never an error; queries report it as `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateError {
    /// Caller passed a missing currency pair or an inverted time range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A non-increasing timestamp was added to an ordered series.
    #[error("Order violation for {pair}: timestamp {timestamp} is not after last stored {last}")]
    OrderViolation {
        pair: CurrencyPair,
        timestamp: Timestamp,
        last: Timestamp,
    },
}

impl RateError {
    /// Shorthand for the error returned when no pair identifier was given.
    pub fn missing_pair() -> Self {
        RateError::InvalidArgument("currency pair must not be empty".to_string())
    }

    /// Shorthand for the error returned when `start` is after `end`.
    pub fn inverted_range(start: Timestamp, end: Timestamp) -> Self {
        RateError::InvalidArgument(format!(
            "start is greater than end, [start, end]: [{}, {}]",
            start, end
        ))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RateError::InvalidArgument(_))
    }

    pub fn is_order_violation(&self) -> bool {
        matches!(self, RateError::OrderViolation { .. })
    }

    /// Get a stable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            RateError::InvalidArgument(_) => "INVALID_ARGUMENT",
            RateError::OrderViolation { .. } => "ORDER_VIOLATION",
        }
    }
}

/// Result type alias for rate store operations.
pub type Result<T> = std::result::Result<T, RateError>;
