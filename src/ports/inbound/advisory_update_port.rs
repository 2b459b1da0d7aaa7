use crate::application::dto::UpdateSummary;
use crate::shared::Result;

/// AdvisoryUpdatePort - Inbound port for the advisory sync use case
///
/// This port defines the interface that external adapters (CLI, scheduler)
/// use to trigger one full sync of the advisory mirror.
pub trait AdvisoryUpdatePort {
    /// Runs one full update pass over the feed
    ///
    /// # Returns
    /// A summary of the run (versions processed, records written/skipped)
    ///
    /// # Errors
    /// Returns an error if the version manifest cannot be fetched or
    /// decoded, if any version's advisory payload cannot be fetched or
    /// decoded, if a record carries a malformed identifier, or if a
    /// document cannot be written. The run is all-or-nothing; documents
    /// written before the failure remain on disk.
    fn update(&self) -> Result<UpdateSummary>;
}
