//! fxrates FX store
//!
//! In-memory FX rate time series keyed by currency pair, answering "rate as
//! of time T" and "average rate over `[start, end]`" in O(log N).
//!
//! # Variants
//!
//! - [`OrderedRateStore`]: each pair's rates must arrive in strictly
//!   increasing timestamp order; out of order inserts are rejected.
//! - [`UnorderedRateStore`]: accepts any order, with equal timestamps
//!   overwriting. Running-sum averages are exact only for in-order inserts.
//!
//! # Example
//!
//! ```rust
//! use fxrates_fx::{NanRates, OrderedRateStore, RateStore};
//!
//! let mut store = OrderedRateStore::new();
//! store.add("EURRUB", 90.110, 1579598310)?;
//! store.add("EURRUB", 90.120, 1579598320)?;
//!
//! assert_eq!(store.get("EURRUB", 1579598315)?, Some(90.110));
//! assert_eq!(store.average("EURRUB", 1579598315, 1579598325)?, Some(90.120));
//! assert!(store.get_or_nan("EURUSD", 1579598315)?.is_nan());
//! # Ok::<(), fxrates_common::RateError>(())
//! ```

pub mod config;
pub mod ordered;
pub mod store;
pub mod unordered;

pub use config::{AverageStrategy, RateStoreConfig};
pub use ordered::OrderedRateStore;
pub use store::{NanRates, RateStore};
pub use unordered::UnorderedRateStore;

pub use fxrates_common::{CurrencyPair, Observation, RateError, TimeRange, Timestamp};
