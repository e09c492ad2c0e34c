//! Scripted transport shared by the behavior tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use rookie_core::{
    ApiEnvelope, ApiErrorBody, ClientConfig, HttpClient, HttpError, HttpRequest, HttpResponse,
    StockApiClient,
};
use serde_json::Value;
use tokio::sync::Notify;

pub const BASE_URL: &str = "http://stocks.test/api";

/// Fake transport answering by URL suffix and recording every request.
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    routes: Mutex<HashMap<String, Result<HttpResponse, HttpError>>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, suffix: &str, response: Result<HttpResponse, HttpError>) {
        self.routes
            .lock()
            .expect("route table should not be poisoned")
            .insert(String::from(suffix), response);
    }

    /// Hold responses for `suffix` until the returned handle is notified.
    pub fn gate(&self, suffix: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates
            .lock()
            .expect("gate table should not be poisoned")
            .insert(String::from(suffix), Arc::clone(&notify));
        notify
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    pub fn recorded_urls(&self) -> Vec<String> {
        self.recorded_requests()
            .into_iter()
            .map(|request| request.url)
            .collect()
    }

    fn lookup(&self, url: &str) -> (Result<HttpResponse, HttpError>, Option<Arc<Notify>>) {
        let response = self
            .routes
            .lock()
            .expect("route table should not be poisoned")
            .iter()
            .find(|(suffix, _)| url.ends_with(suffix.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| Ok(HttpResponse::new(404, "")));
        let gate = self
            .gates
            .lock()
            .expect("gate table should not be poisoned")
            .iter()
            .find(|(suffix, _)| url.ends_with(suffix.as_str()))
            .map(|(_, notify)| Arc::clone(notify));
        (response, gate)
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let (response, gate) = self.lookup(&request.url);
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);

        Box::pin(async move {
            if let Some(gate) = gate {
                gate.notified().await;
            }
            response
        })
    }
}

pub fn client_with(transport: Arc<ScriptedHttpClient>) -> StockApiClient {
    let config = ClientConfig::new(BASE_URL).expect("test base url is valid");
    StockApiClient::with_http_client(config, transport)
}

pub fn record_json(ticker: &str, company_name: &str) -> String {
    format!(
        r#"{{
            "ticker": "{ticker}",
            "company_name": "{company_name}",
            "description": "{company_name} makes things.",
            "market_cap": 1250000000.5,
            "market_cap_text": "$1.25B",
            "exchange": "XNAS",
            "employees": 12345,
            "website": "example.com",
            "logo_url": "https://example.test/{ticker}.png",
            "industry": "Widgets"
        }}"#
    )
}

pub fn success_body(ticker: &str, company_name: &str) -> String {
    let data: Value =
        serde_json::from_str(&record_json(ticker, company_name)).expect("record fixture is json");
    serde_json::to_string(&ApiEnvelope::success(data)).expect("envelope should serialize")
}

/// Failed envelope as the service sends it alongside a non-2xx status.
pub fn failure_body(error: &str, message: Option<&str>, code: u16) -> String {
    let envelope: ApiEnvelope<Value> =
        ApiEnvelope::failure(ApiErrorBody::new(error, message.map(str::to_owned), code));
    serde_json::to_string(&envelope).expect("envelope should serialize")
}

pub fn ok(body: impl Into<String>) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::ok_json(body))
}
