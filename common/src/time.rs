//! Timestamps and query ranges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RateError, Result};

/// Caller supplied point in time.
///
/// The unit is up to the caller; the chrono helpers below treat it as epoch seconds.
pub type Timestamp = i64;

/// Convert a UTC date-time to epoch seconds.
pub fn timestamp_from_datetime(datetime: DateTime<Utc>) -> Timestamp {
    datetime.timestamp()
}

/// Convert epoch seconds to a UTC date-time, if representable.
pub fn datetime_from_timestamp(timestamp: Timestamp) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0)
}

/// Inclusive time range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl TimeRange {
    /// Create a range, failing if `start` is after `end`.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self> {
        if start > end {
            return Err(RateError::inverted_range(start, end));
        }
        Ok(Self { start, end })
    }

    /// A range covering a single instant.
    pub fn at(timestamp: Timestamp) -> Self {
        Self {
            start: timestamp,
            end: timestamp,
        }
    }

    /// Create a range from two date-times, in epoch seconds.
    pub fn from_datetimes(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        Self::new(timestamp_from_datetime(start), timestamp_from_datetime(end))
    }

    /// Check if a timestamp falls within the range, bounds included.
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }

    /// Check if the range shares at least one instant with `[first, last]`.
    pub fn overlaps(&self, first: Timestamp, last: Timestamp) -> bool {
        self.end >= first && self.start <= last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let err = TimeRange::new(1579598353, 1579598352).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = TimeRange::new(10, 20).unwrap();
        assert!(range.contains(10));
        assert!(range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));

        let instant = TimeRange::at(15);
        assert!(instant.contains(15));
        assert!(!instant.contains(16));
    }

    #[test]
    fn test_overlaps() {
        let range = TimeRange::new(10, 20).unwrap();
        assert!(range.overlaps(20, 30));
        assert!(range.overlaps(0, 10));
        assert!(range.overlaps(12, 14));
        assert!(!range.overlaps(21, 30));
        assert!(!range.overlaps(0, 9));
    }

    #[test]
    fn test_datetime_conversions() {
        let datetime = Utc.with_ymd_and_hms(2020, 1, 21, 9, 18, 30).unwrap();
        let timestamp = timestamp_from_datetime(datetime);
        assert_eq!(timestamp, 1579598310);
        assert_eq!(datetime_from_timestamp(timestamp), Some(datetime));

        let end = Utc.with_ymd_and_hms(2020, 1, 21, 9, 19, 0).unwrap();
        let range = TimeRange::from_datetimes(datetime, end).unwrap();
        assert_eq!(range, TimeRange::new(1579598310, 1579598340).unwrap());
        assert!(TimeRange::from_datetimes(end, datetime).is_err());
    }
}
