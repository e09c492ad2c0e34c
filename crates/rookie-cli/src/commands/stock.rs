use std::io;
use std::process::ExitCode;

use rookie_core::{validate, StockApiClient};

use crate::cli::StockArgs;
use crate::error::CliError;
use crate::output::Renderer;

pub async fn run(
    args: &StockArgs,
    client: &StockApiClient,
    renderer: Renderer,
) -> Result<ExitCode, CliError> {
    let ticker = validate(&args.ticker)?;
    let record = match client.fetch_stock(&ticker).await {
        Ok(record) => record,
        Err(error) => {
            return super::report_failure(
                renderer,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
                error,
            )
        }
    };

    renderer.record(&mut io::stdout().lock(), &record)?;
    Ok(ExitCode::SUCCESS)
}
