use crate::advisory_sync::domain::VersionManifest;
use crate::ports::outbound::FeedTransport;
use crate::shared::{Result, SyncError};

/// Name of the manifest resource under the feed base URL.
const VERSIONS_FILE: &str = "photon_versions.json";

/// VersionLister - discovers the release branches published by the feed
///
/// The whole retry budget is handed to the transport in a single call;
/// the lister itself never re-attempts. This is deliberately different
/// from [`AdvisoryFetcher`](super::AdvisoryFetcher), which runs its own
/// outer retry loop with single-attempt transport calls.
pub struct VersionLister<'a, T: FeedTransport> {
    transport: &'a T,
    base_url: &'a str,
    retry: u32,
}

impl<'a, T: FeedTransport> VersionLister<'a, T> {
    pub fn new(transport: &'a T, base_url: &'a str, retry: u32) -> Self {
        Self {
            transport,
            base_url,
            retry,
        }
    }

    /// Fetches and decodes the version manifest, preserving manifest order
    pub fn list_versions(&self) -> Result<Vec<String>> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), VERSIONS_FILE);

        let payload = self.transport.fetch(&url, self.retry).map_err(|e| {
            SyncError::Fetch {
                resource: VERSIONS_FILE.to_string(),
                details: e.to_string(),
            }
        })?;

        parse_manifest(&payload)
    }
}

fn parse_manifest(payload: &[u8]) -> Result<Vec<String>> {
    let manifest: VersionManifest =
        serde_json::from_slice(payload).map_err(|e| SyncError::Decode {
            resource: VERSIONS_FILE.to_string(),
            details: e.to_string(),
        })?;

    Ok(manifest.branches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Test transport that records each call and replays a fixed response
    struct RecordingTransport {
        response: std::result::Result<Vec<u8>, String>,
        calls: RefCell<Vec<(String, u32)>>,
    }

    impl RecordingTransport {
        fn ok(body: &str) -> Self {
            Self {
                response: Ok(body.as_bytes().to_vec()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl FeedTransport for RecordingTransport {
        fn fetch(&self, url: &str, retries: u32) -> Result<Vec<u8>> {
            self.calls.borrow_mut().push((url.to_string(), retries));
            match &self.response {
                Ok(body) => Ok(body.clone()),
                Err(message) => anyhow::bail!("{}", message),
            }
        }
    }

    #[test]
    fn test_list_versions_preserves_manifest_order() {
        let transport = RecordingTransport::ok(r#"{"branches": ["3.0", "1.0", "dev", "4.0"]}"#);
        let lister = VersionLister::new(&transport, "https://example.com/feed/", 5);

        let versions = lister.list_versions().unwrap();
        assert_eq!(versions, vec!["3.0", "1.0", "dev", "4.0"]);
    }

    #[test]
    fn test_list_versions_builds_manifest_url_and_passes_budget() {
        let transport = RecordingTransport::ok(r#"{"branches": []}"#);
        let lister = VersionLister::new(&transport, "https://example.com/feed", 7);

        lister.list_versions().unwrap();
        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            ("https://example.com/feed/photon_versions.json".to_string(), 7)
        );
    }

    #[test]
    fn test_list_versions_transport_failure_is_fetch_error() {
        let transport = RecordingTransport::failing("connection refused");
        let lister = VersionLister::new(&transport, "https://example.com/feed/", 3);

        let err = lister.list_versions().unwrap_err();
        let display = format!("{}", err);
        assert!(display.contains("Failed to fetch photon_versions.json"));
        assert!(display.contains("connection refused"));
        // A single transport call carries the whole budget.
        assert_eq!(transport.calls.borrow().len(), 1);
    }

    #[test]
    fn test_parse_manifest_rejects_wrong_shape() {
        let err = parse_manifest(br#"["3.0", "dev"]"#).unwrap_err();
        assert!(format!("{}", err).contains("Failed to decode photon_versions.json"));
    }

    #[test]
    fn test_parse_manifest_rejects_invalid_json() {
        assert!(parse_manifest(b"not json").is_err());
    }

    #[test]
    fn test_parse_manifest_empty_branches() {
        let versions = parse_manifest(br#"{"branches": []}"#).unwrap();
        assert!(versions.is_empty());
    }
}
