//! SleepIQ position CLI.
//!
//! Moves one side of a named bed to a preset position and exits once the
//! foundation has stopped moving or the configured poll limit is reached.

mod cli;
mod commands;
mod error;
mod logging;

use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use error::exit_codes;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
                _ => exit_codes::FAILURE,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    logging::init(cli.verbose);

    match commands::run_position(&cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            e.report();
            std::process::exit(e.exit_code());
        }
    }
}
