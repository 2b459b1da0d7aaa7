use crate::advisory_sync::domain::AdvisoryRecord;
use crate::shared::{Result, SyncError};
use std::path::{Path, PathBuf};

use super::advisory_fetcher::advisory_resource;

/// Structural classification of an advisory identifier.
///
/// The two rejection cases are treated very differently downstream: an
/// empty identifier only skips that record, while a malformed one aborts
/// the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierCheck {
    /// Exactly three hyphen-delimited segments (e.g. `CVE-2020-0001`)
    Valid,
    /// No identifier at all; the record has no addressable file
    Empty,
    /// Anything else (e.g. `CVE-2020`, `CVE-2020-0001-extra`)
    Malformed,
}

/// Decodes a version's advisory payload into individual records and
/// stamps each one with the version being processed
///
/// # Errors
/// Returns [`SyncError::Decode`] if the payload is not a JSON array of
/// advisory records.
pub fn split_records(version: &str, payload: &[u8]) -> Result<Vec<AdvisoryRecord>> {
    let mut records: Vec<AdvisoryRecord> =
        serde_json::from_slice(payload).map_err(|e| SyncError::Decode {
            resource: advisory_resource(version),
            details: e.to_string(),
        })?;

    for record in &mut records {
        record.os_version = Some(version.to_string());
    }

    Ok(records)
}

/// Classifies an advisory identifier before it is handed to the writer
pub fn classify_identifier(cve_id: &str) -> IdentifierCheck {
    if cve_id.is_empty() {
        return IdentifierCheck::Empty;
    }
    if cve_id.split('-').count() != 3 {
        return IdentifierCheck::Malformed;
    }
    IdentifierCheck::Valid
}

/// Target sub-path for a valid record: `<version>/<package>`
pub fn record_sub_path(version: &str, pkg: &str) -> PathBuf {
    Path::new(version).join(pkg)
}
