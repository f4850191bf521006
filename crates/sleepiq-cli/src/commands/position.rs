//! Position command: load config, move the bed, wait for it to settle.

use sleepiq_core::{
    run_position_change, BedService, Configuration, MoveOutcome, PositionRequest, SleepIqClient,
};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Run the position command
pub async fn run_position(cli: &Cli) -> Result<()> {
    let request = PositionRequest::new(cli.bed_name.as_str(), cli.side, cli.position)?;

    let config = Configuration::load(&cli.config)
        .await
        .map_err(|source| CliError::Config {
            path: cli.config.display().to_string(),
            source,
        })?;
    debug!(op = "main", path = %cli.config.display(), "configuration loaded");

    let client = SleepIqClient::with_base_url(cli.api_url.as_str()).map_err(CliError::Client)?;

    execute(&client, &config, &request).await
}

/// Run one position change and turn the outcome into a CLI result.
pub async fn execute<S>(service: &S, config: &Configuration, request: &PositionRequest) -> Result<()>
where
    S: BedService + ?Sized,
{
    let outcome = run_position_change(service, &config.credentials, request, config.poll).await?;
    finish(outcome)
}

fn finish(outcome: MoveOutcome) -> Result<()> {
    match outcome {
        MoveOutcome::Settled { polls, elapsed } => {
            info!(
                op = "main",
                polls,
                elapsed_secs = elapsed.as_secs_f64(),
                "movement has stopped"
            );
            Ok(())
        }
        MoveOutcome::TimedOut { polls, elapsed } => Err(CliError::TimeoutExceeded { polls, elapsed }),
    }
}
