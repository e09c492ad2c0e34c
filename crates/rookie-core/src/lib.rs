//! # Rookie Core
//!
//! Client-side core for the Rookie Numbers stock lookup service.
//!
//! ## Overview
//!
//! - **Ticker validation** before anything touches the network
//! - **API client** that folds transport, HTTP and payload failures into one
//!   [`OperationError`]
//! - **Request lifecycle** ([`SearchSession`]) with loading, success and
//!   retry-capable failure states, and stale-response suppression
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api_client`] | `/stock/{ticker}` and `/health` client with error normalization |
//! | [`config`] | Base URL resolution and client settings |
//! | [`domain`] | Ticker, stock record and health types |
//! | [`envelope`] | `{success, data, error}` response wrapper |
//! | [`error`] | Validation and operation errors |
//! | [`http_client`] | Transport seam (reqwest in production) |
//! | [`lifecycle`] | Search session state machine |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rookie_core::{ClientConfig, SearchSession, StockApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StockApiClient::new(ClientConfig::resolve(None)?);
//!     let mut session = SearchSession::new();
//!
//!     let ticket = session.submit(" aapl ")?;
//!     session.run(&client, ticket).await;
//!     println!("{:?}", session.state());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / User     │
//! └────────┬────────┘
//!          │ validate
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Search Session  │────▶│ Stock API Client │
//! └─────────────────┘     └────────┬─────────┘
//!                                  │
//!                                  ▼
//!                         ┌──────────────────┐
//!                         │ HTTP Client      │
//!                         │ (reqwest/fake)   │
//!                         └──────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use rookie_core::{OperationError, OperationErrorKind};
//!
//! fn describe(error: &OperationError) -> &'static str {
//!     match error.kind() {
//!         OperationErrorKind::NetworkUnreachable => "backend down",
//!         OperationErrorKind::HttpError => "service refused",
//!         OperationErrorKind::PayloadInvalid => "bad payload",
//!         OperationErrorKind::InvalidRequest => "missing ticker",
//!     }
//! }
//! ```

pub mod api_client;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod lifecycle;

pub use api_client::{interpret_stock_response, StockApiClient};

pub use config::{ClientConfig, ConfigError};

pub use domain::{validate, HealthStatus, StockRecord, TickerSymbol};

pub use envelope::{ApiEnvelope, ApiErrorBody};

pub use error::{OperationError, OperationErrorKind, ValidationError};

pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use lifecycle::{RequestState, RequestTicket, SearchSession};
