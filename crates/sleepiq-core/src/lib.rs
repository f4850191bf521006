//! Shared core for commanding a SleepIQ bed foundation to a preset.
//!
//! Nothing here exits the process; callers map [`CoreError`] to their own
//! reporting.

pub mod config;
pub mod controller;
pub mod error;
pub mod resolver;
pub mod service;
pub mod types;
pub mod workflow;

pub use config::{Configuration, Credentials, PollSettings};
pub use controller::{move_and_wait, MoveOutcome};
pub use error::{ConfigError, CoreError, ServiceError, ValidationError};
pub use resolver::resolve_bed;
pub use service::{BedService, Session, SleepIqClient};
pub use types::{BedDescriptor, BedStatus, Position, PositionRequest, Side, TargetSelection};
pub use workflow::run_position_change;
