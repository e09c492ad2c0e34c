use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Company metadata returned by `GET /stock/{ticker}`.
///
/// Text fields the service may leave out deserialize as empty strings and a
/// missing employee count as `0` (unknown).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub ticker: String,
    pub company_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub market_cap: f64,
    #[serde(default)]
    pub market_cap_text: String,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub employees: u64,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub industry: String,
}

impl StockRecord {
    /// Employee headcount, `None` when the service reported it as unknown.
    pub const fn known_employees(&self) -> Option<u64> {
        if self.employees == 0 {
            None
        } else {
            Some(self.employees)
        }
    }

    /// Website as an absolute URL, `None` when the service has none.
    pub fn website_url(&self) -> Option<String> {
        let website = self.website.trim();
        if website.is_empty() {
            None
        } else if website.starts_with("http") {
            Some(website.to_owned())
        } else {
            Some(format!("https://{website}"))
        }
    }
}

/// Service liveness report from `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub version: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    /// Server clock at the time of the check, if the timestamp is RFC 3339.
    pub fn checked_at(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::parse(&self.timestamp, &Rfc3339).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(website: &str, employees: u64) -> StockRecord {
        StockRecord {
            ticker: String::from("AAPL"),
            company_name: String::from("Apple Inc."),
            description: String::new(),
            market_cap: 3.0e12,
            market_cap_text: String::from("$3.00T"),
            exchange: String::from("XNAS"),
            employees,
            website: String::from(website),
            logo_url: String::new(),
            industry: String::new(),
        }
    }

    #[test]
    fn sparse_payload_fills_defaults() {
        let parsed: StockRecord =
            serde_json::from_str(r#"{"ticker":"ZZZ","company_name":"Zed Corp"}"#)
                .expect("sparse record should parse");

        assert_eq!(parsed.ticker, "ZZZ");
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.employees, 0);
        assert_eq!(parsed.known_employees(), None);
        assert_eq!(parsed.website_url(), None);
    }

    #[test]
    fn website_gets_scheme_when_missing() {
        assert_eq!(
            record("apple.com", 1).website_url().as_deref(),
            Some("https://apple.com")
        );
        assert_eq!(
            record("http://apple.com", 1).website_url().as_deref(),
            Some("http://apple.com")
        );
    }

    #[test]
    fn health_timestamp_parses_rfc3339() {
        let health = HealthStatus {
            status: String::from("ok"),
            message: String::from("RookieNumbers API is running"),
            timestamp: String::from("2025-01-02T03:04:05Z"),
            version: String::from("1.0.0"),
        };

        assert!(health.is_ok());
        let checked_at = health.checked_at().expect("timestamp should parse");
        assert_eq!(checked_at.year(), 2025);
        assert_eq!(checked_at.hour(), 3);
    }

    #[test]
    fn health_timestamp_garbage_is_none() {
        let health = HealthStatus {
            status: String::from("degraded"),
            message: String::new(),
            timestamp: String::from("yesterday"),
            version: String::new(),
        };

        assert!(!health.is_ok());
        assert!(health.checked_at().is_none());
    }
}
