use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Inline input errors raised before any network call is issued.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    #[error("Please enter a stock ticker symbol")]
    EmptyInput,
    #[error("Ticker must be 1-6 characters long")]
    BadLength,
    #[error("Ticker can only contain letters and dots")]
    BadCharacters,
}

/// Failure classification derived from an [`OperationError`] status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationErrorKind {
    /// No response could be obtained from the service (status 0).
    NetworkUnreachable,
    /// The client refused to issue the request (status 400 raised locally).
    InvalidRequest,
    /// The service answered with a non-2xx status.
    HttpError,
    /// The service answered 2xx but the payload was unusable (status 500).
    PayloadInvalid,
}

impl OperationErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NetworkUnreachable => "network_unreachable",
            Self::InvalidRequest => "invalid_request",
            Self::HttpError => "http_error",
            Self::PayloadInvalid => "payload_invalid",
        }
    }
}

impl Display for OperationErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single error type surfaced by the API client.
///
/// Every failure path (transport, HTTP status, payload) is normalized into
/// this shape; raw transport and parse errors never leave the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct OperationError {
    kind: OperationErrorKind,
    message: String,
    status: u16,
    code: Option<String>,
}

impl OperationError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: OperationErrorKind::NetworkUnreachable,
            message: message.into(),
            status: 0,
            code: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: OperationErrorKind::InvalidRequest,
            message: message.into(),
            status: 400,
            code: None,
        }
    }

    pub fn http(status: u16, message: impl Into<String>, code: Option<String>) -> Self {
        Self {
            kind: OperationErrorKind::HttpError,
            message: message.into(),
            status,
            code,
        }
    }

    pub fn payload(message: impl Into<String>) -> Self {
        Self {
            kind: OperationErrorKind::PayloadInvalid,
            message: message.into(),
            status: 500,
            code: None,
        }
    }

    pub const fn kind(&self) -> OperationErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status, or 0 when the service could not be reached.
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Machine-readable upstream code (`error.error` in the envelope).
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}
