//! Run configuration loading.
//!
//! Reads a YAML document with the SleepIQ credentials and poll timings.
//! Any key can be overridden by an environment variable named after the
//! upper-cased key, e.g. `SLEEPIQPASSWORD`.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

pub const USERNAME_KEY: &str = "SleepIQUsername";
pub const PASSWORD_KEY: &str = "SleepIQPassword";
pub const POLL_INTERVAL_KEY: &str = "BedStatusPollInterval";
pub const POLL_MAX_KEY: &str = "BedStatusPollMax";

/// Account credentials for the SleepIQ service.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Timing of the movement poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    /// Delay between status checks
    pub interval: Duration,
    /// Longest time to wait for movement to settle
    pub max: Duration,
}

/// Immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub credentials: Credentials,
    pub poll: PollSettings,
}

/// File representation; every key is optional until the environment
/// has been applied.
#[derive(Debug, Default, Deserialize)]
struct RawConfiguration {
    #[serde(rename = "SleepIQUsername")]
    username: Option<String>,
    #[serde(rename = "SleepIQPassword")]
    password: Option<String>,
    #[serde(rename = "BedStatusPollInterval")]
    poll_interval: Option<u64>,
    #[serde(rename = "BedStatusPollMax")]
    poll_max: Option<u64>,
}

impl Configuration {
    /// Load configuration from a YAML file, applying process environment
    /// overrides.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;

        Self::from_sources(&content, |key| std::env::var(key).ok())
    }

    /// Build configuration from YAML text and an environment lookup.
    pub fn from_sources<F>(yaml: &str, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw: RawConfiguration = if yaml.trim().is_empty() {
            RawConfiguration::default()
        } else {
            serde_yaml::from_str(yaml)?
        };

        let lookup = |key: &str| env(&key.to_ascii_uppercase());

        let username = lookup(USERNAME_KEY)
            .or(raw.username)
            .ok_or(ConfigError::MissingKey(USERNAME_KEY))?;
        let password = lookup(PASSWORD_KEY)
            .or(raw.password)
            .ok_or(ConfigError::MissingKey(PASSWORD_KEY))?;

        let interval = resolve_seconds(POLL_INTERVAL_KEY, lookup(POLL_INTERVAL_KEY), raw.poll_interval)?;
        let max = resolve_seconds(POLL_MAX_KEY, lookup(POLL_MAX_KEY), raw.poll_max)?;

        Ok(Self {
            credentials: Credentials { username, password },
            poll: PollSettings { interval, max },
        })
    }
}

fn resolve_seconds(
    key: &'static str,
    env_value: Option<String>,
    file_value: Option<u64>,
) -> Result<Duration, ConfigError> {
    let seconds = match env_value {
        Some(text) => text
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidValue {
                key,
                message: format!("'{}' is not a number of seconds: {}", text, e),
            })?,
        None => file_value.ok_or(ConfigError::MissingKey(key))?,
    };

    if seconds == 0 {
        return Err(ConfigError::InvalidValue {
            key,
            message: "must be greater than zero".to_string(),
        });
    }

    Ok(Duration::from_secs(seconds))
}
