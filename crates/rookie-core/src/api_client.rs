//! Stock service client.
//!
//! Every failure is normalized into an [`OperationError`], evaluated in this
//! order:
//!
//! | Failure | Status | Message |
//! |---------|--------|---------|
//! | No response (connect, DNS, timeout) | `0` | [`MSG_UNREACHABLE`] |
//! | Non-2xx status | HTTP status | upstream message or [`MSG_FETCH_FAILED`] |
//! | 2xx without `success`/`data` | `500` | upstream message or [`MSG_INVALID_FORMAT`] |
//! | Anything else (unparsable body, unreadable body) | `500` | [`MSG_UNEXPECTED`] |

use std::sync::Arc;

use log::{debug, warn};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::envelope::ApiEnvelope;
use crate::http_client::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::{HealthStatus, OperationError, StockRecord, TickerSymbol};

pub const MSG_TICKER_REQUIRED: &str = "Ticker symbol is required";
pub const MSG_UNREACHABLE: &str =
    "Unable to connect to server. Please check if the backend is running.";
pub const MSG_FETCH_FAILED: &str = "Failed to fetch stock data";
pub const MSG_INVALID_FORMAT: &str = "Invalid response format";
pub const MSG_UNEXPECTED: &str = "An unexpected error occurred while fetching stock data";
pub const MSG_HEALTH_FAILED: &str = "Health check failed";
pub const MSG_HEALTH_UNREACHABLE: &str = "Unable to check API health";

/// Client for the `/stock/{ticker}` and `/health` endpoints.
#[derive(Clone)]
pub struct StockApiClient {
    config: ClientConfig,
    http_client: Arc<dyn HttpClient>,
}

impl StockApiClient {
    /// Client backed by reqwest, using the configured user agent.
    pub fn new(config: ClientConfig) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::with_user_agent(&config.user_agent));
        Self::with_http_client(config, http_client)
    }

    pub fn with_http_client(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch company metadata for a validated ticker.
    pub async fn fetch_stock(&self, ticker: &TickerSymbol) -> Result<StockRecord, OperationError> {
        self.fetch_stock_unchecked(ticker.as_str()).await
    }

    /// Fetch company metadata for a raw ticker that skipped validation.
    ///
    /// Only the empty check is repeated here; the value is trimmed,
    /// uppercased and path-encoded before it is sent.
    pub async fn fetch_stock_unchecked(&self, ticker: &str) -> Result<StockRecord, OperationError> {
        let trimmed = ticker.trim();
        if trimmed.is_empty() {
            warn!("refusing stock request without a ticker");
            return Err(OperationError::invalid_request(MSG_TICKER_REQUIRED));
        }

        let ticker = trimmed.to_uppercase();
        let url = self
            .config
            .endpoint(&format!("stock/{}", urlencoding::encode(&ticker)));
        let request = HttpRequest::get(url)
            .with_json_content_type()
            .with_timeout_ms(self.config.timeout_ms);

        debug!("fetching stock data for {ticker} from {}", request.url);

        let response = match self.http_client.execute(request).await {
            Ok(response) => response,
            Err(error) if error.is_unreachable() => {
                warn!("stock request for {ticker} got no response: {error}");
                return Err(OperationError::network(MSG_UNREACHABLE));
            }
            Err(error) => {
                warn!("stock response for {ticker} could not be read: {error}");
                return Err(OperationError::payload(MSG_UNEXPECTED));
            }
        };

        let status = response.status;
        interpret_stock_response(response).inspect_err(|error| {
            warn!(
                "stock request for {ticker} failed: status={status} normalized={} message={}",
                error.status(),
                error.message()
            );
        })
    }

    /// Check that the service is reachable.
    pub async fn health_check(&self) -> Result<HealthStatus, OperationError> {
        let request = HttpRequest::get(self.config.endpoint("health"))
            .with_timeout_ms(self.config.timeout_ms);

        debug!("checking service health at {}", request.url);

        let response = self.http_client.execute(request).await.map_err(|error| {
            warn!("health check got no usable response: {error}");
            OperationError::network(MSG_HEALTH_UNREACHABLE)
        })?;

        if !response.is_success() {
            warn!("health check returned status {}", response.status);
            return Err(OperationError::http(response.status, MSG_HEALTH_FAILED, None));
        }

        serde_json::from_str::<HealthStatus>(&response.body).map_err(|error| {
            warn!("health check body is not a health report: {error}");
            OperationError::network(MSG_HEALTH_UNREACHABLE)
        })
    }
}

/// Map a raw `/stock` response onto a record or a normalized error.
///
/// Any valid JSON is read as an envelope; the record itself is only decoded
/// on a 2xx with `success: true`.
pub fn interpret_stock_response(response: HttpResponse) -> Result<StockRecord, OperationError> {
    let body: Value = serde_json::from_str(&response.body)
        .map_err(|_| OperationError::payload(MSG_UNEXPECTED))?;
    let envelope = ApiEnvelope::from_value(body);

    if !response.is_success() {
        return Err(OperationError::http(
            response.status,
            envelope.error_message().unwrap_or(MSG_FETCH_FAILED),
            envelope.error_code().map(str::to_owned),
        ));
    }

    let message = envelope
        .error_message()
        .unwrap_or(MSG_INVALID_FORMAT)
        .to_owned();
    let data = envelope
        .into_data()
        .ok_or_else(|| OperationError::payload(message))?;

    serde_json::from_value(data).map_err(|_| OperationError::payload(MSG_UNEXPECTED))
}
