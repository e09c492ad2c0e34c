use std::io;
use std::process::ExitCode;

use rookie_core::StockApiClient;

use crate::error::CliError;
use crate::output::Renderer;

pub async fn run(client: &StockApiClient, renderer: Renderer) -> Result<ExitCode, CliError> {
    let health = match client.health_check().await {
        Ok(health) => health,
        Err(error) => {
            return super::report_failure(
                renderer,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
                error,
            )
        }
    };
    renderer.health(&mut io::stdout().lock(), &health)?;

    // reachable but reporting something other than "ok"
    if !health.is_ok() {
        return Ok(ExitCode::from(3));
    }
    Ok(ExitCode::SUCCESS)
}
