//! End-to-end position change: login, resolve, command, wait.

use tracing::info;

use crate::config::{Credentials, PollSettings};
use crate::controller::{move_and_wait, MoveOutcome};
use crate::error::CoreError;
use crate::resolver::resolve_bed;
use crate::service::BedService;
use crate::types::{PositionRequest, TargetSelection};

/// Run one command-and-poll cycle against the named bed.
///
/// # Errors
///
/// `Auth`, `Query`, `NotFound`, `Validation`, `Command` or `Poll`, in the
/// order the steps run. A timeout is not an error; see [`MoveOutcome`].
pub async fn run_position_change<S>(
    service: &S,
    credentials: &Credentials,
    request: &PositionRequest,
    poll: PollSettings,
) -> Result<MoveOutcome, CoreError>
where
    S: BedService + ?Sized,
{
    let session = service
        .authenticate(&credentials.username, &credentials.password)
        .await
        .map_err(CoreError::Auth)?;
    info!(op = "login", user_id = %session.user_id, "logged into SleepIQ account");

    let beds = service.list_beds(&session).await.map_err(CoreError::Query)?;
    let bed = resolve_bed(&beds, request.bed_name())?;

    let target = TargetSelection::new(bed.id.clone(), request.side(), request.position())?;
    move_and_wait(service, &session, &target, poll).await
}
