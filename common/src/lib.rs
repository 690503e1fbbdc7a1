//! fxrates Common Types
//!
//! Shared types for the fxrates workspace: currency pair identifiers,
//! timestamps and ranges, rate observations and the error type.

pub mod identifiers;
pub mod rate;
pub mod error;
pub mod time;

pub use identifiers::*;
pub use rate::*;
pub use error::*;
pub use time::*;
