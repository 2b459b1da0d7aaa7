use crate::ports::outbound::FeedTransport;
use crate::shared::{Result, SyncError};
use tracing::warn;

/// AdvisoryFetcher - retrieves one version's advisory payload
///
/// Runs its own bounded retry loop with one transport attempt per
/// iteration and no wait between attempts. Each failed attempt is logged
/// with its index and the underlying error.
pub struct AdvisoryFetcher<'a, T: FeedTransport> {
    transport: &'a T,
    base_url: &'a str,
    retry: u32,
}

impl<'a, T: FeedTransport> AdvisoryFetcher<'a, T> {
    pub fn new(transport: &'a T, base_url: &'a str, retry: u32) -> Self {
        Self {
            transport,
            base_url,
            retry,
        }
    }

    /// Fetches the advisory payload for `version`, retrying up to the
    /// configured attempt count
    ///
    /// # Errors
    /// Returns [`SyncError::FetchExhausted`] carrying the version and the
    /// attempt count once every attempt has failed.
    pub fn fetch_advisory(&self, version: &str) -> Result<Vec<u8>> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            advisory_resource(version)
        );

        for attempt in 1..=self.retry {
            match self.transport.fetch(&url, 1) {
                Ok(payload) => return Ok(payload),
                Err(err) => {
                    warn!(
                        "Retrying to fetch Photon advisory for version {} ({}/{}): {}",
                        version, attempt, self.retry, err
                    );
                }
            }
        }

        Err(SyncError::FetchExhausted {
            version: version.to_string(),
            attempts: self.retry,
        }
        .into())
    }
}

/// Name of a version's advisory resource under the feed base URL.
pub fn advisory_resource(version: &str) -> String {
    format!("cve_data_photon{}.json", version)
}
