//! Error types for the SleepIQ core.

use thiserror::Error;

/// Core error type for a single position-change run.
///
/// Every variant is terminal: the workflow never retries locally.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid parameter: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to log into SleepIQ account: {0}")]
    Auth(#[source] ServiceError),

    #[error("Failed to query beds: {0}")]
    Query(#[source] ServiceError),

    #[error("Failed to identify target bed {0}")]
    NotFound(String),

    #[error("Failed to set bed {bed_id} to target position: {source}")]
    Command {
        bed_id: String,
        #[source]
        source: ServiceError,
    },

    #[error("Failed to query status of bed {bed_id} while waiting for movement to end: {source}")]
    Poll {
        bed_id: String,
        #[source]
        source: ServiceError,
    },
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error reading config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to decode config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Missing config key: {0}")]
    MissingKey(&'static str),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Rejected user input, raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("must specify bed-name parameter")]
    EmptyBedName,

    #[error("bed id must not be empty")]
    EmptyBedId,

    #[error("invalid side '{0}', expected Left or Right")]
    InvalidSide(String),

    #[error("invalid position '{0}', expected 1-6 (1=Favorite, 2=Read, 3=WatchTV, 4=Flat, 5=ZeroG, 6=Snore)")]
    InvalidPosition(String),
}

/// Failures reported by the remote bed service boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
