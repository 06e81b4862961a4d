//! Ticker code validation and normalization.

use std::fmt;
use std::str::FromStr;

use crate::core::KlineError;

/// A validated Sina ticker code: `sh` or `sz` followed by six digits,
/// stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StockSymbol(String);

impl StockSymbol {
    /// Parse and normalize a user-supplied ticker code.
    ///
    /// The input is trimmed and lowercased; only `sh`/`sz` plus exactly six
    /// ASCII digits is accepted. No side effects.
    ///
    /// # Errors
    ///
    /// Returns [`KlineError::InvalidSymbol`] for any other shape.
    pub fn parse(raw: &str) -> Result<Self, KlineError> {
        let code = raw.trim().to_ascii_lowercase();
        let digits = code.strip_prefix("sh").or_else(|| code.strip_prefix("sz"));
        match digits {
            Some(d) if d.len() == 6 && d.bytes().all(|b| b.is_ascii_digit()) => Ok(Self(code)),
            _ => Err(KlineError::InvalidSymbol(raw.trim().to_string())),
        }
    }

    /// The normalized lowercase code, e.g. `sz000001`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StockSymbol {
    type Err = KlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StockSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
