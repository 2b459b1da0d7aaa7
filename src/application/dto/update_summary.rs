/// UpdateSummary - Internal response DTO from the advisory sync use case
///
/// Counts what a run actually did, for reporting and for assertions in
/// tests. Skipped records are the empty-identifier ones; the `dev`
/// branch never reaches the counters at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Release branches fetched and processed (excludes `dev`)
    pub versions_processed: usize,
    /// Advisory documents written to the store
    pub records_written: usize,
    /// Records dropped for carrying no identifier
    pub records_skipped: usize,
}
