//! Maps a bed name to a registered bed.

use tracing::debug;

use crate::error::CoreError;
use crate::types::BedDescriptor;

/// Find the first bed whose name matches exactly (case-sensitive).
///
/// Duplicate names are not deduplicated; list order decides.
pub fn resolve_bed<'a>(beds: &'a [BedDescriptor], name: &str) -> Result<&'a BedDescriptor, CoreError> {
    let (index, bed) = beds
        .iter()
        .enumerate()
        .find(|(_, bed)| bed.name == name)
        .ok_or_else(|| CoreError::NotFound(name.to_string()))?;

    debug!(op = "resolve", bed_name = name, bed_id = %bed.id, index, "identified bed");
    Ok(bed)
}
