//! Rate observations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::time::Timestamp;

/// A single rate seen at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: Timestamp,
    pub rate: f64,
}

impl Observation {
    pub fn new(timestamp: Timestamp, rate: f64) -> Self {
        Self { timestamp, rate }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.rate, self.timestamp)
    }
}

impl From<(Timestamp, f64)> for Observation {
    fn from((timestamp, rate): (Timestamp, f64)) -> Self {
        Self::new(timestamp, rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_display() {
        let obs = Observation::new(1579598310, 90.11);
        assert_eq!(obs.to_string(), "90.11@1579598310");
    }

    #[test]
    fn test_observation_json() {
        let obs = Observation::from((1579598310, 90.11));
        let json = serde_json::to_value(obs).unwrap();
        assert_eq!(json["timestamp"], 1579598310);
        assert_eq!(json["rate"], 90.11);
    }
}
