//! Rate store accepting rates in any timestamp order.
//!
//! Each pair keeps a `BTreeMap` from timestamp to rate, alongside a running
//! sum and count taken when the entry was added. The running sum chains from
//! the entry with the greatest timestamp at that moment, so it only matches
//! sorted order while inserts arrive in non-decreasing timestamp order. Late
//! or duplicate timestamps are still accepted, but running-sum averages over
//! them are unreliable. [`AverageStrategy::Scan`] trades the O(log N) average
//! for an exact one.

use std::collections::{BTreeMap, HashMap};

use fxrates_common::{CurrencyPair, Observation, Result, TimeRange, Timestamp};
use tracing::{debug, instrument, trace, warn};

use crate::config::{AverageStrategy, RateStoreConfig};
use crate::store::RateStore;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    rate: f64,
    /// Series size when this entry was added, plus one.
    count: i64,
    /// `rate` plus the sum held by the greatest timestamp at insertion.
    sum: f64,
}

type Series = BTreeMap<Timestamp, Entry>;

/// Rate store accepting any insertion order; equal timestamps overwrite.
#[derive(Debug, Clone, Default)]
pub struct UnorderedRateStore {
    series: HashMap<CurrencyPair, Series>,
    config: RateStoreConfig,
}

impl UnorderedRateStore {
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

    fn average_running_sum(series: &Series, range: TimeRange) -> Option<f64> {
        let mut window = series.range(range.start..=range.end);
        let (from_timestamp, from) = window.next()?;
        let Some((_, to)) = window.next_back() else {
            return Some(from.rate);
        };

        if from.count == 1 {
            return Some(to.sum / to.count as f64);
        }

        // Out of order inserts can leave nothing below `from`; count from zero then.
        let (below_sum, below_count) = series
            .range(..*from_timestamp)
            .next_back()
            .map_or((0.0, 0), |(_, e)| (e.sum, e.count));

        Some((to.sum - below_sum) / (to.count - below_count) as f64)
    }

    fn average_scan(series: &Series, range: TimeRange) -> Option<f64> {
        let (sum, count) = series
            .range(range.start..=range.end)
            .fold((0.0, 0usize), |(sum, count), (_, e)| (sum + e.rate, count + 1));

        match count {
            0 => None,
            n => Some(sum / n as f64),
        }
    }
}

impl RateStore for UnorderedRateStore {
    fn add(&mut self, pair: &str, rate: f64, timestamp: Timestamp) -> Result<()> {
        CurrencyPair::validate(pair)?;

        let series = self
            .series
            .entry(CurrencyPair::new(pair))
            .or_insert_with(|| {
                debug!(pair, "Created series");
                Series::new()
            });

        let last = series.last_key_value().map(|(&t, e)| (t, e.sum));
        if let Some((last, _)) = last {
            if timestamp <= last {
                warn!(
                    pair,
                    timestamp,
                    last,
                    "Out of order rate accepted; running sums may no longer match time order"
                );
            }
        }

        let prev_sum = last.map_or(0.0, |(_, sum)| sum);
        let entry = Entry {
            rate,
            count: series.len() as i64 + 1,
            sum: prev_sum + rate,
        };
        series.insert(timestamp, entry);
        trace!(pair, timestamp, rate, "Added rate");
        Ok(())
    }

    fn get(&self, pair: &str, timestamp: Timestamp) -> Result<Option<f64>> {
        CurrencyPair::validate(pair)?;

        let rate = self
            .series
            .get(pair)
            .and_then(|series| series.range(..=timestamp).next_back())
            .map(|(_, e)| e.rate);
        Ok(rate)
    }

    #[instrument(level = "trace", skip(self))]
    fn average(&self, pair: &str, start: Timestamp, end: Timestamp) -> Result<Option<f64>> {
        CurrencyPair::validate(pair)?;
        let range = TimeRange::new(start, end)?;

        let Some(series) = self.series.get(pair) else {
            return Ok(None);
        };
        let (Some((&first, _)), Some((&last, _))) =
            (series.first_key_value(), series.last_key_value())
        else {
            return Ok(None);
        };
        if !range.overlaps(first, last) {
            return Ok(None);
        }

        Ok(match self.config.average_strategy {
            AverageStrategy::RunningSum => Self::average_running_sum(series, range),
            AverageStrategy::Scan => Self::average_scan(series, range),
        })
    }

    fn len(&self, pair: &str) -> usize {
        self.series.get(pair).map_or(0, BTreeMap::len)
    }

    fn pairs(&self) -> Vec<CurrencyPair> {
        let mut pairs: Vec<_> = self.series.keys().cloned().collect();
        pairs.sort();
        pairs
    }

    fn first(&self, pair: &str) -> Option<Observation> {
        let (&timestamp, entry) = self.series.get(pair)?.first_key_value()?;
        Some(Observation::new(timestamp, entry.rate))
    }

    fn last(&self, pair: &str) -> Option<Observation> {
        let (&timestamp, entry) = self.series.get(pair)?.last_key_value()?;
        Some(Observation::new(timestamp, entry.rate))
    }
}
