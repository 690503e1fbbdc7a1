//! The rate store contract shared by both store variants.

use fxrates_common::{CurrencyPair, Observation, Result, Timestamp};

/// In-memory FX rate time series keyed by currency pair.
///
/// Caller misuse (a missing pair, an inverted range, an out of order insert
/// where the variant forbids it) is an error. Missing data is `Ok(None)`.
pub trait RateStore {
    /// Add a rate observed at `timestamp` for `pair`.
    fn add(&mut self, pair: &str, rate: f64, timestamp: Timestamp) -> Result<()>;

    /// Rate of the latest observation at or before `timestamp`.
    fn get(&self, pair: &str, timestamp: Timestamp) -> Result<Option<f64>>;

    /// Mean rate of the observations within `[start, end]`.
    fn average(&self, pair: &str, start: Timestamp, end: Timestamp) -> Result<Option<f64>>;

    /// Number of stored observations for `pair`.
    fn len(&self, pair: &str) -> usize;

    /// All pairs holding data, sorted.
    fn pairs(&self) -> Vec<CurrencyPair>;

    /// Earliest stored observation for `pair`.
    fn first(&self, pair: &str) -> Option<Observation>;

    /// Latest stored observation for `pair`.
    fn last(&self, pair: &str) -> Option<Observation>;

    /// Check if no pair holds any data.
    fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }
}

/// Double-returning view of a [`RateStore`] where missing data reads as `NaN`.
pub trait NanRates: RateStore {
    /// Like [`RateStore::get`], with `NaN` for no data.
    fn get_or_nan(&self, pair: &str, timestamp: Timestamp) -> Result<f64> {
        Ok(self.get(pair, timestamp)?.unwrap_or(f64::NAN))
    }

    /// Like [`RateStore::average`], with `NaN` for no data.
    fn average_or_nan(&self, pair: &str, start: Timestamp, end: Timestamp) -> Result<f64> {
        Ok(self.average(pair, start, end)?.unwrap_or(f64::NAN))
    }
}

impl<S: RateStore + ?Sized> NanRates for S {}
