//! Command-and-poll controller.
//!
//! Issues one preset command and then waits, polling foundation status,
//! until the bed stops moving or the poll deadline passes.
//!
//! ```text
//! Idle --set_position ok--> CommandIssued --not moving--> Settled
//!   |                            |
//!   +--error--> Failed           +--moving--> Polling --not moving--> Settled
//!                                              |  ^
//!                                              |  +--moving, before deadline
//!                                              +--deadline reached--> TimedOut
//!                                              +--status error--> Failed
//! ```
//!
//! The deadline is checked after every sleep, whatever the last status
//! said, so a bed that stops on the final poll still times out.

use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use crate::config::PollSettings;
use crate::error::CoreError;
use crate::service::{BedService, Session};
use crate::types::TargetSelection;

/// Terminal result of a command that was accepted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Movement stopped.
    Settled { polls: u32, elapsed: Duration },
    /// Deadline reached before the loop saw movement stop.
    TimedOut { polls: u32, elapsed: Duration },
}

impl MoveOutcome {
    /// Number of status queries made after the command
    pub fn polls(&self) -> u32 {
        match self {
            MoveOutcome::Settled { polls, .. } | MoveOutcome::TimedOut { polls, .. } => *polls,
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            MoveOutcome::Settled { elapsed, .. } | MoveOutcome::TimedOut { elapsed, .. } => *elapsed,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, MoveOutcome::Settled { .. })
    }
}

/// Command the target to its preset and wait for movement to end.
///
/// The command is sent exactly once. Its response seeds the loop; each
/// iteration fetches fresh status, sleeps `poll.interval`, then compares
/// time since the command against `poll.max`.
///
/// # Errors
///
/// `CoreError::Command` if the preset call fails (no status query is made),
/// `CoreError::Poll` if any status query fails.
pub async fn move_and_wait<S>(
    service: &S,
    session: &Session,
    target: &TargetSelection,
    poll: PollSettings,
) -> Result<MoveOutcome, CoreError>
where
    S: BedService + ?Sized,
{
    let bed_id = target.bed_id();

    info!(
        op = "command",
        bed_id,
        side = %target.side(),
        position = %target.position(),
        "setting bed to target position"
    );
    let mut status = service
        .set_position(session, bed_id, target.side(), target.position())
        .await
        .map_err(|source| CoreError::Command {
            bed_id: bed_id.to_string(),
            source,
        })?;

    let started = Instant::now();
    let mut polls: u32 = 0;

    while status.is_moving {
        status = service
            .foundation_status(session, bed_id)
            .await
            .map_err(|source| CoreError::Poll {
                bed_id: bed_id.to_string(),
                source,
            })?;
        polls += 1;
        debug!(op = "poll", bed_id, polls, is_moving = status.is_moving, "bed status");

        sleep(poll.interval).await;

        let elapsed = started.elapsed();
        if elapsed >= poll.max {
            return Ok(MoveOutcome::TimedOut { polls, elapsed });
        }
    }

    Ok(MoveOutcome::Settled {
        polls,
        elapsed: started.elapsed(),
    })
}
