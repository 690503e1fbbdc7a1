//! Rate store for callers that add each pair's rates in time order.
//!
//! Each series is three parallel vectors (timestamps, rates, running sums)
//! searched by binary search. `add` is amortised O(1); `get` and `average`
//! are O(log N).

use std::collections::HashMap;

use fxrates_common::{CurrencyPair, Observation, RateError, Result, TimeRange, Timestamp};
use tracing::{debug, instrument, trace, warn};

use crate::config::RateStoreConfig;
use crate::store::RateStore;

/// Append-only series with strictly increasing timestamps.
#[derive(Debug, Clone, Default)]
struct Series {
    timestamps: Vec<Timestamp>,
    rates: Vec<f64>,
    /// `sums[i]` is the sum of `rates[0..=i]`.
    sums: Vec<f64>,
}

impl Series {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            timestamps: Vec::with_capacity(capacity),
            rates: Vec::with_capacity(capacity),
            sums: Vec::with_capacity(capacity),
        }
    }

    fn len(&self) -> usize {
        self.timestamps.len()
    }

    fn last_timestamp(&self) -> Option<Timestamp> {
        self.timestamps.last().copied()
    }

    /// Caller guarantees `timestamp` is after the last stored one.
    fn push(&mut self, timestamp: Timestamp, rate: f64) {
        let prev_sum = self.sums.last().copied().unwrap_or(0.0);
        self.timestamps.push(timestamp);
        self.rates.push(rate);
        self.sums.push(prev_sum + rate);
    }

    /// Index of the last entry with a timestamp `<= timestamp`.
    fn floor(&self, timestamp: Timestamp) -> Option<usize> {
        self.timestamps
            .partition_point(|&t| t <= timestamp)
            .checked_sub(1)
    }

    /// Index of the first entry with a timestamp `>= timestamp`; `len()` if none.
    fn ceiling(&self, timestamp: Timestamp) -> usize {
        self.timestamps.partition_point(|&t| t < timestamp)
    }

    /// Running sum of everything before `index`, zero for the first entry.
    fn sum_before(&self, index: usize) -> f64 {
        match index {
            0 => 0.0,
            i => self.sums[i - 1],
        }
    }

    fn observation(&self, index: usize) -> Observation {
        Observation::new(self.timestamps[index], self.rates[index])
    }

    fn get(&self, timestamp: Timestamp) -> Option<f64> {
        self.floor(timestamp).map(|i| self.rates[i])
    }

    fn average(&self, range: TimeRange) -> Option<f64> {
        let first = *self.timestamps.first()?;
        let last = *self.timestamps.last()?;
        if !range.overlaps(first, last) {
            return None;
        }

        let from = self.ceiling(range.start);
        let to = self.floor(range.end)?;

        if from > to {
            return None;
        }
        if from == to {
            return Some(self.rates[to]);
        }

        let count = (to - from + 1) as f64;
        Some((self.sums[to] - self.sum_before(from)) / count)
    }
}

/// Rate store requiring strictly increasing timestamps per pair.
#[derive(Debug, Clone, Default)]
pub struct OrderedRateStore {
    series: HashMap<CurrencyPair, Series>,
    config: RateStoreConfig,
}

impl OrderedRateStore {
    /// Create an empty store with default configuration.
    pub fn new() -> Self {
        Self::with_config(RateStoreConfig::default())
    }

    /// Create an empty store with custom configuration.
    pub fn with_config(config: RateStoreConfig) -> Self {
        Self {
            series: HashMap::new(),
            config,
        }
    }
}

impl RateStore for OrderedRateStore {
    fn add(&mut self, pair: &str, rate: f64, timestamp: Timestamp) -> Result<()> {
        CurrencyPair::validate(pair)?;

        let capacity = self.config.series_capacity;
        let series = self
            .series
            .entry(CurrencyPair::new(pair))
            .or_insert_with(|| {
                debug!(pair, "Created series");
                Series::with_capacity(capacity)
            });

        if let Some(last) = series.last_timestamp() {
            if timestamp <= last {
                warn!(pair, timestamp, last, "Rejected out of order rate");
                return Err(RateError::OrderViolation {
                    pair: CurrencyPair::new(pair),
                    timestamp,
                    last,
                });
            }
        }

        series.push(timestamp, rate);
        trace!(pair, timestamp, rate, "Added rate");
        Ok(())
    }

    fn get(&self, pair: &str, timestamp: Timestamp) -> Result<Option<f64>> {
        CurrencyPair::validate(pair)?;
        Ok(self.series.get(pair).and_then(|s| s.get(timestamp)))
    }

    #[instrument(level = "trace", skip(self))]
    fn average(&self, pair: &str, start: Timestamp, end: Timestamp) -> Result<Option<f64>> {
        CurrencyPair::validate(pair)?;
        let range = TimeRange::new(start, end)?;
        Ok(self.series.get(pair).and_then(|s| s.average(range)))
    }

    fn len(&self, pair: &str) -> usize {
        self.series.get(pair).map_or(0, Series::len)
    }

    fn pairs(&self) -> Vec<CurrencyPair> {
        let mut pairs: Vec<_> = self.series.keys().cloned().collect();
        pairs.sort();
        pairs
    }

    fn first(&self, pair: &str) -> Option<Observation> {
        let series = self.series.get(pair)?;
        (series.len() > 0).then(|| series.observation(0))
    }

    fn last(&self, pair: &str) -> Option<Observation> {
        let series = self.series.get(pair)?;
        series.len().checked_sub(1).map(|i| series.observation(i))
    }
}
