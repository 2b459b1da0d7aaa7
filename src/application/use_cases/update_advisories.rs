use crate::advisory_sync::services::{
    classify_identifier, record_sub_path, split_records, AdvisoryFetcher, IdentifierCheck,
    RecordWriter, VersionLister,
};
use crate::application::dto::{UpdateRequest, UpdateSummary};
use crate::ports::inbound::AdvisoryUpdatePort;
use crate::ports::outbound::{AdvisoryStore, FeedTransport, ProgressReporter};
use crate::shared::{Result, SyncError};
use anyhow::Context;
use tracing::{debug, info, warn};

/// Directory under the vuln-list root that holds the Photon mirror.
const PHOTON_DIR: &str = "photon";

/// Reserved branch name that is never fetched or persisted.
const DEV_BRANCH: &str = "dev";

/// UpdateAdvisoriesUseCase - Core use case for the advisory sync
///
/// Runs one strictly sequential pass: list versions, then per version
/// fetch, split, and persist. Any fetch, decode, or write failure aborts
/// the whole run; documents written before the failure stay on disk.
///
/// # Type Parameters
/// * `T` - FeedTransport implementation
/// * `S` - AdvisoryStore implementation
/// * `PR` - ProgressReporter implementation
pub struct UpdateAdvisoriesUseCase<T, S, PR> {
    transport: T,
    store: S,
    progress_reporter: PR,
    request: UpdateRequest,
}

impl<T, S, PR> UpdateAdvisoriesUseCase<T, S, PR>
where
    T: FeedTransport,
    S: AdvisoryStore,
    PR: ProgressReporter,
{
    /// Creates a new UpdateAdvisoriesUseCase with injected dependencies
    pub fn new(transport: T, store: S, progress_reporter: PR, request: UpdateRequest) -> Self {
        Self {
            transport,
            store,
            progress_reporter,
            request,
        }
    }

    /// Executes one full sync of the advisory mirror
    pub fn execute(&self) -> Result<UpdateSummary> {
        let result = self.run();
        if result.is_err() {
            // Clears any live progress bar before the caller prints the error.
            self.progress_reporter
                .report_error("❌ Photon advisory sync aborted");
        }
        result
    }

    fn run(&self) -> Result<UpdateSummary> {
        info!("fetching Photon OS advisories");
        self.progress_reporter
            .report("🔍 Fetching Photon OS advisories...");

        let lister = VersionLister::new(&self.transport, &self.request.base_url, self.request.retry);
        let versions = lister
            .list_versions()
            .context("failed to get Photon versions")?;
        debug!("feed lists {} branch(es)", versions.len());

        let fetcher =
            AdvisoryFetcher::new(&self.transport, &self.request.base_url, self.request.retry);
        let writer = RecordWriter::new(&self.store, self.request.vuln_list_dir.join(PHOTON_DIR));

        let mut summary = UpdateSummary::default();
        for version in &versions {
            if version.eq_ignore_ascii_case(DEV_BRANCH) {
                debug!("skipping reserved branch {}", version);
                continue;
            }

            self.process_version(version, &fetcher, &writer, &mut summary)?;
            summary.versions_processed += 1;
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Photon advisory sync complete: {} record(s) saved across {} version(s), {} skipped",
            summary.records_written, summary.versions_processed, summary.records_skipped
        ));

        Ok(summary)
    }

    /// Fetches, splits, and persists one version's advisory payload
    fn process_version(
        &self,
        version: &str,
        fetcher: &AdvisoryFetcher<'_, T>,
        writer: &RecordWriter<'_, S>,
        summary: &mut UpdateSummary,
    ) -> Result<()> {
        let payload = fetcher
            .fetch_advisory(version)
            .context("failed to fetch Photon advisory")?;

        let records = split_records(version, &payload)
            .with_context(|| format!("failed to decode Photon advisory for version {version}"))?;

        let total = records.len();
        self.progress_reporter
            .report(&format!("photon {}: {} advisory record(s)", version, total));

        let mut written = 0;
        let mut skipped = 0;
        for (index, record) in records.iter().enumerate() {
            match classify_identifier(&record.cve_id) {
                IdentifierCheck::Empty => {
                    // No identifier, no addressable file. Skip, keep going.
                    warn!(
                        "photon {}: advisory for package {} has an empty CVE-ID, skipping",
                        version, record.pkg
                    );
                    skipped += 1;
                }
                IdentifierCheck::Malformed => {
                    warn!("invalid CVE-ID: {}", record.cve_id);
                    return Err(SyncError::InvalidIdentifier {
                        cve_id: record.cve_id.clone(),
                    })
                    .with_context(|| {
                        format!("failed to save advisory records for version {version}")
                    });
                }
                IdentifierCheck::Valid => {
                    let sub_path = record_sub_path(version, &record.pkg);
                    writer
                        .write_record(&sub_path, &record.cve_id, record)
                        .with_context(|| {
                            format!(
                                "failed to save {} for package {}",
                                record.cve_id, record.pkg
                            )
                        })?;
                    written += 1;
                }
            }

            self.progress_reporter
                .report_progress(index + 1, total, Some(version));
        }

        summary.records_written += written;
        summary.records_skipped += skipped;

        // Finishes this version's progress bar; the next version starts
        // a fresh one.
        self.progress_reporter.report_completion(&format!(
            "photon {}: {} record(s) saved, {} skipped",
            version, written, skipped
        ));

        Ok(())
    }
}

impl<T, S, PR> AdvisoryUpdatePort for UpdateAdvisoriesUseCase<T, S, PR>
where
    T: FeedTransport,
    S: AdvisoryStore,
    PR: ProgressReporter,
{
    fn update(&self) -> Result<UpdateSummary> {
        self.execute()
    }
}
