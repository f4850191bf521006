//! Error types for the SleepIQ position CLI.
//!
//! CliError wraps CoreError from the shared library and adds CLI-specific variants.

use std::time::Duration;

use sleepiq_core::{ConfigError, CoreError, ServiceError};
use thiserror::Error;
use tracing::{error, warn};

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("Failed to load configuration at {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: ConfigError,
    },

    #[error("Failed to initialize SleepIQ client: {0}")]
    Client(#[source] ServiceError),

    #[error("Reached maximum bed status polling time after {polls} status checks ({elapsed:?}), quitting")]
    TimeoutExceeded { polls: u32, elapsed: Duration },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(_)
            | CliError::Config { .. }
            | CliError::Client(_)
            | CliError::TimeoutExceeded { .. } => exit_codes::FAILURE,
        }
    }

    /// Error class as reported in the log line
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Core(e) => match e {
                CoreError::Validation(_) => "ValidationError",
                CoreError::Auth(_) => "AuthError",
                CoreError::Query(_) => "QueryError",
                CoreError::NotFound(_) => "NotFoundError",
                CoreError::Command { .. } => "CommandError",
                CoreError::Poll { .. } => "PollError",
            },
            CliError::Config { .. } => "ConfigError",
            CliError::Client(_) => "ClientError",
            CliError::TimeoutExceeded { .. } => "TimeoutExceeded",
        }
    }

    /// Log the terminal condition. A timeout is a warning: the command
    /// may have worked and the bed may still be moving.
    pub fn report(&self) {
        match self {
            CliError::TimeoutExceeded { polls, elapsed } => {
                warn!(
                    op = "main",
                    kind = self.kind(),
                    polls,
                    elapsed_secs = elapsed.as_secs_f64(),
                    "{}",
                    self
                );
            }
            _ => {
                error!(op = "main", kind = self.kind(), "{}", self);
            }
        }
    }
}

impl From<sleepiq_core::ValidationError> for CliError {
    fn from(e: sleepiq_core::ValidationError) -> Self {
        CliError::Core(CoreError::Validation(e))
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
