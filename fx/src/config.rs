//! Rate store configuration.

/// How the unordered store answers `average` queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AverageStrategy {
    /// Difference of stored running sums, O(log N).
    ///
    /// Sums chain in insertion order, so results are only exact when each
    /// pair received its timestamps in non-decreasing order.
    #[default]
    RunningSum,
    /// Sum the rates inside the range on every query, O(log N + K).
    Scan,
}

/// Configuration for rate stores.
#[derive(Debug, Clone)]
pub struct RateStoreConfig {
    /// Capacity reserved up front for each new ordered series.
    pub series_capacity: usize,
    /// Averaging method of the unordered store.
    pub average_strategy: AverageStrategy,
}

impl Default for RateStoreConfig {
    fn default() -> Self {
        Self {
            series_capacity: 0,
            average_strategy: AverageStrategy::RunningSum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RateStoreConfig::default();
        assert_eq!(config.series_capacity, 0);
        assert_eq!(config.average_strategy, AverageStrategy::RunningSum);
        assert_eq!(AverageStrategy::default(), AverageStrategy::RunningSum);
    }
}
