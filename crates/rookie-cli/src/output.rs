use std::io::Write;

use rookie_core::{HealthStatus, OperationError, RequestState, StockRecord};
use serde::Serialize;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::error::CliError;

const NOT_AVAILABLE: &str = "N/A";

/// Writes results in the format chosen on the command line.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    pretty: bool,
}

impl Renderer {
    pub const fn new(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }

    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn record<W: Write>(&self, out: &mut W, record: &StockRecord) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Json => self.json(out, record),
            OutputFormat::Text => write_record_text(out, record),
        }
    }

    pub fn health<W: Write>(&self, out: &mut W, health: &HealthStatus) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Json => self.json(out, health),
            OutputFormat::Text => {
                writeln!(out, "status : {}", health.status)?;
                writeln!(out, "message: {}", or_na(&health.message))?;
                writeln!(out, "version: {}", or_na(&health.version))?;
                match health.checked_at() {
                    Some(at) => writeln!(out, "checked: {at}")?,
                    None => writeln!(out, "checked: {}", or_na(&health.timestamp))?,
                }
                Ok(())
            }
        }
    }

    pub fn operation_error<W: Write>(
        &self,
        out: &mut W,
        error: &OperationError,
    ) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Json => self.json(
                out,
                &json!({
                    "kind": error.kind().as_str(),
                    "status": error.status(),
                    "message": error.message(),
                    "code": error.code(),
                }),
            ),
            OutputFormat::Text => {
                writeln!(out, "error: {}", error.message())?;
                Ok(())
            }
        }
    }

    /// Render one lifecycle state as seen by the session observer.
    pub fn state<W: Write>(&self, out: &mut W, state: &RequestState) -> Result<(), CliError> {
        match state {
            RequestState::Idle => Ok(()),
            RequestState::Loading(ticker) => {
                if self.format == OutputFormat::Text {
                    writeln!(out, "Fetching stock data for {ticker}...")?;
                }
                Ok(())
            }
            RequestState::Succeeded(record) => self.record(out, record),
            RequestState::Failed { error, last_ticker } => {
                self.operation_error(out, error)?;
                if self.format == OutputFormat::Text {
                    writeln!(out, "Type :retry to look up {last_ticker} again.")?;
                }
                Ok(())
            }
        }
    }

    fn json<W: Write, T: Serialize + ?Sized>(&self, out: &mut W, value: &T) -> Result<(), CliError> {
        let payload = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        writeln!(out, "{payload}")?;
        Ok(())
    }
}

fn write_record_text<W: Write>(out: &mut W, record: &StockRecord) -> Result<(), CliError> {
    writeln!(out, "{} ({})", record.company_name, record.ticker)?;
    writeln!(out, "  Market cap : {}", or_na(&record.market_cap_text))?;
    writeln!(out, "  Exchange   : {}", or_na(&record.exchange))?;
    let employees = record
        .known_employees()
        .map(format_thousands)
        .unwrap_or_else(|| String::from(NOT_AVAILABLE));
    writeln!(out, "  Employees  : {employees}")?;
    writeln!(out, "  Industry   : {}", or_na(&record.industry))?;
    if let Some(url) = record.website_url() {
        writeln!(out, "  Website    : {url}")?;
    }
    if !record.logo_url.is_empty() {
        writeln!(out, "  Logo       : {}", record.logo_url)?;
    }

    if !record.description.trim().is_empty() {
        writeln!(out)?;
        writeln!(out, "What does {} do?", record.company_name)?;
        writeln!(out, "  {}", record.description.trim())?;
    }
    Ok(())
}

fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}
