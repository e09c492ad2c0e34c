use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MIN_TICKER_LEN: usize = 1;
const MAX_TICKER_LEN: usize = 6;

/// Validate raw user input and normalize it into a [`TickerSymbol`].
pub fn validate(input: &str) -> Result<TickerSymbol, ValidationError> {
    TickerSymbol::parse(input)
}

/// Normalized exchange ticker: 1-6 characters of `A`-`Z` or `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TickerSymbol(String);

impl TickerSymbol {
    /// Trim, uppercase and check a candidate ticker.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let normalized = trimmed.to_uppercase();
        let len = normalized.chars().count();
        if !(MIN_TICKER_LEN..=MAX_TICKER_LEN).contains(&len) {
            return Err(ValidationError::BadLength);
        }

        if !normalized.chars().all(|ch| ch.is_ascii_uppercase() || ch == '.') {
            return Err(ValidationError::BadCharacters);
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TickerSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for TickerSymbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for TickerSymbol {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TickerSymbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for TickerSymbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TickerSymbol> for String {
    fn from(value: TickerSymbol) -> Self {
        value.0
    }
}
