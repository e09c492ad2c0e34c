//! # Domain Models
//!
//! Value types exchanged between the validator, the API client and the
//! request lifecycle.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TickerSymbol`] | Validated, uppercased ticker (1-6 chars, `A`-`Z` and `.`) |
//! | [`StockRecord`] | Company metadata returned by the stock endpoint |
//! | [`HealthStatus`] | Liveness report returned by the health endpoint |
//!
//! ## Validation
//!
//! A [`TickerSymbol`] can only be obtained through [`validate`] (or the
//! equivalent `parse`/`FromStr`/`TryFrom` impls), so every ticker handed to
//! the API client has already passed the syntactic rules:
//!
//! ```rust
//! use rookie_core::{validate, ValidationError};
//!
//! assert_eq!(validate(" aapl ").unwrap().as_str(), "AAPL");
//! assert_eq!(validate("AA$PL"), Err(ValidationError::BadCharacters));
//! ```

mod stock;
mod ticker;

pub use stock::{HealthStatus, StockRecord};
pub use ticker::{validate, TickerSymbol};
