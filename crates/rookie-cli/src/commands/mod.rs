mod health;
mod session;
mod stock;

use std::io::Write;
use std::process::ExitCode;

use rookie_core::{ClientConfig, OperationError, StockApiClient};

use crate::cli::{Cli, Command, OutputFormat};
use crate::error::CliError;
use crate::output::Renderer;

pub async fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let config = ClientConfig::resolve(cli.base_url.as_deref())?
        .with_user_agent(concat!("rookie-cli/", env!("CARGO_PKG_VERSION")));
    log::debug!("using stock service at {}", config.base_url());

    let client = StockApiClient::new(config);
    let renderer = Renderer::new(cli.format, cli.pretty);

    match &cli.command {
        Command::Stock(args) => stock::run(args, &client, renderer).await,
        Command::Health => health::run(&client, renderer).await,
        Command::Session => session::run(&client, renderer).await,
    }
}

/// Render a failed call and return its exit code.
///
/// JSON goes to `out` so scripts see `kind`/`status`/`code`; text goes to `err`.
fn report_failure<O, E>(
    renderer: Renderer,
    out: &mut O,
    err: &mut E,
    error: OperationError,
) -> Result<ExitCode, CliError>
where
    O: Write,
    E: Write,
{
    match renderer.format() {
        OutputFormat::Json => renderer.operation_error(out, &error)?,
        OutputFormat::Text => renderer.operation_error(err, &error)?,
    }
    Ok(ExitCode::from(CliError::Operation(error).exit_code()))
}
