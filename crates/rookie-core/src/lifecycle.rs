//! Search request lifecycle.
//!
//! ```text
//!            search(t)                 resolve(Ok)
//!   Idle ───────────────▶ Loading(t) ──────────────▶ Succeeded(record)
//!                           ▲    │
//!              retry()      │    │ resolve(Err)
//!   Failed(err, t) ─────────┘    └───────────────▶ Failed(err, t)
//! ```
//!
//! `search` is accepted from every state and supersedes whatever was in
//! flight. Each search hands out a [`RequestTicket`]; only the ticket of the
//! most recent search can resolve the session, so a slow response for an
//! older search is dropped instead of overwriting newer state.

use std::fmt::{Debug, Formatter};

use log::{debug, info};

use crate::{validate, OperationError, StockApiClient, StockRecord, TickerSymbol, ValidationError};

/// Presentation state of a search session.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Loading(TickerSymbol),
    Succeeded(StockRecord),
    Failed {
        error: OperationError,
        last_ticker: TickerSymbol,
    },
}

impl RequestState {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading(_) => "loading",
            Self::Succeeded(_) => "succeeded",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Tag for one in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    generation: u64,
    ticker: TickerSymbol,
}

impl RequestTicket {
    pub fn ticker(&self) -> &TickerSymbol {
        &self.ticker
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

type TransitionObserver = Box<dyn FnMut(&RequestState) + Send>;

/// Single-writer coordinator for search, loading, result and retry.
pub struct SearchSession {
    state: RequestState,
    generation: u64,
    last_ticker: Option<TickerSymbol>,
    observers: Vec<TransitionObserver>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for SearchSession {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("last_ticker", &self.last_ticker)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            generation: 0,
            last_ticker: None,
            observers: Vec::new(),
        }
    }

    /// Register a callback that receives every new state.
    pub fn on_transition<F>(&mut self, observer: F)
    where
        F: FnMut(&RequestState) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Ticker of the most recent search, kept across success and failure.
    pub fn last_ticker(&self) -> Option<&TickerSymbol> {
        self.last_ticker.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading(_))
    }

    /// Start a search, discarding any previous record or error.
    pub fn search(&mut self, ticker: TickerSymbol) -> RequestTicket {
        self.generation += 1;
        if self.is_loading() {
            debug!(
                "search for {ticker} supersedes in-flight request (generation {})",
                self.generation
            );
        }

        let ticket = RequestTicket {
            generation: self.generation,
            ticker: ticker.clone(),
        };
        self.last_ticker = Some(ticker.clone());
        self.transition(RequestState::Loading(ticker));
        ticket
    }

    /// Validate raw input and start a search. State is untouched on error.
    pub fn submit(&mut self, input: &str) -> Result<RequestTicket, ValidationError> {
        let ticker = validate(input)?;
        Ok(self.search(ticker))
    }

    /// Re-issue the failed request for the same ticker.
    pub fn retry(&mut self) -> Option<RequestTicket> {
        let RequestState::Failed { last_ticker, .. } = &self.state else {
            return None;
        };

        let ticker = last_ticker.clone();
        info!("retrying request for {ticker}");
        Some(self.search(ticker))
    }

    /// Apply a request outcome. Returns `false` when the ticket was superseded.
    pub fn resolve(
        &mut self,
        ticket: &RequestTicket,
        outcome: Result<StockRecord, OperationError>,
    ) -> bool {
        if ticket.generation != self.generation || !self.is_loading() {
            debug!(
                "dropping stale response for {} (generation {}, current {})",
                ticket.ticker, ticket.generation, self.generation
            );
            return false;
        }

        let next = match outcome {
            Ok(record) => RequestState::Succeeded(record),
            Err(error) => RequestState::Failed {
                error,
                last_ticker: ticket.ticker.clone(),
            },
        };
        self.transition(next);
        true
    }

    /// Fetch the ticket's ticker and resolve the session with the outcome.
    pub async fn run(&mut self, client: &StockApiClient, ticket: RequestTicket) -> bool {
        let outcome = client.fetch_stock(&ticket.ticker).await;
        self.resolve(&ticket, outcome)
    }

    fn transition(&mut self, next: RequestState) {
        info!("request state {} -> {}", self.state.name(), next.name());
        self.state = next;
        for observer in &mut self.observers {
            observer(&self.state);
        }
    }
}
