//! Identifier types for rate series.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::error::{RateError, Result};

/// Identifier of an exchange rate series, e.g. `EURRUB`.
///
/// The code is kept verbatim; `EURRUB` and `eurrub` name different series.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CurrencyPair(String);

impl CurrencyPair {
    /// Create a new currency pair without validation.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Parse a caller supplied identifier, rejecting empty or blank input.
    pub fn parse(code: &str) -> Result<Self> {
        Self::validate(code)?;
        Ok(Self(code.to_string()))
    }

    /// Check that an identifier names a pair at all.
    pub fn validate(code: &str) -> Result<()> {
        if code.trim().is_empty() {
            return Err(RateError::missing_pair());
        }
        Ok(())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the identifier is usable as a key.
    pub fn is_valid(&self) -> bool {
        Self::validate(&self.0).is_ok()
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyPair {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CurrencyPair {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for CurrencyPair {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<CurrencyPair, _>` be queried with a plain `&str`.
impl Borrow<str> for CurrencyPair {
    fn borrow(&self) -> &str {
        &self.0
    }
}
