//! Remote bed service boundary.
//!
//! The workflow only talks to the cloud through [`BedService`]. The
//! production implementation is [`sleepiq::SleepIqClient`].

pub mod sleepiq;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::types::{BedDescriptor, BedStatus, Position, Side};

pub use sleepiq::SleepIqClient;

/// An authenticated session with the bed service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    /// Session key passed with every request
    pub key: String,
}

/// Operations the position workflow needs from the bed service.
#[async_trait]
pub trait BedService: Send + Sync {
    /// Log into the account.
    async fn authenticate(&self, username: &str, password: &str) -> Result<Session, ServiceError>;

    /// List every bed registered to the account, in service order.
    async fn list_beds(&self, session: &Session) -> Result<Vec<BedDescriptor>, ServiceError>;

    /// Command one side of a bed to a preset and report the resulting state.
    async fn set_position(
        &self,
        session: &Session,
        bed_id: &str,
        side: Side,
        position: Position,
    ) -> Result<BedStatus, ServiceError>;

    /// Fetch the current foundation state of a bed.
    async fn foundation_status(&self, session: &Session, bed_id: &str) -> Result<BedStatus, ServiceError>;
}
