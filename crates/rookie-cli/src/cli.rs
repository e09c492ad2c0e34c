//! CLI argument definitions for rookie.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `stock` | Look up company metadata for one ticker |
//! | `health` | Check that the stock service is reachable |
//! | `session` | Interactive search loop with retry |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--base-url` | `$ROOKIE_API_BASE_URL` or `http://localhost:8080/api` | Stock service base URL |
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! # Examples
//!
//! ```bash
//! rookie stock aapl
//! rookie stock BRK.A --format json --pretty
//! rookie health --base-url http://localhost:8080/api
//! RUST_LOG=debug rookie session
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Rookie Numbers - company basics for any ticker
///
/// Look up what a publicly traded company does and how big it is.
#[derive(Debug, Parser)]
#[command(
    name = "rookie",
    author,
    version,
    about = "Company basics for any stock ticker",
    long_about = "rookie asks the Rookie Numbers service for company metadata: name, \
market cap, exchange, employees, industry, description and website.\n\
\n\
Use 'rookie <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Base URL of the stock service (overrides ROOKIE_API_BASE_URL and .env).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    Text,
    /// JSON object per result.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up company metadata for a ticker.
    ///
    /// # Examples
    ///
    ///   rookie stock AAPL
    ///   rookie stock brk.a --format json
    Stock(StockArgs),

    /// Check that the stock service is up.
    Health,

    /// Interactive search session.
    ///
    /// Type a ticker per line. ':retry' re-runs the last failed lookup,
    /// ':popular' lists suggestions (pick one by number), ':quit' exits.
    Session,
}

#[derive(Debug, Args)]
pub struct StockArgs {
    /// Ticker symbol, 1-6 letters or dots (e.g. AAPL, BRK.A).
    pub ticker: String,
}
