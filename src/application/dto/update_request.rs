use std::path::PathBuf;

/// Default base URL of the Photon CVE metadata feed.
pub const DEFAULT_ADVISORY_URL: &str =
    "https://packages.vmware.com/photon/photon_cve_metadata/";

/// Default number of fetch attempts per advisory resource.
pub const DEFAULT_RETRY: u32 = 5;

/// Default root directory of the local vuln-list mirror.
pub const DEFAULT_VULN_LIST_DIR: &str = "vuln-list";

/// UpdateRequest - Internal request DTO for the advisory sync use case
///
/// Holds the whole configuration surface of a run, read once at startup
/// and passed in explicitly; the core never consults ambient state.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    /// Base URL of the advisory feed
    pub base_url: String,
    /// Number of fetch attempts per advisory resource
    pub retry: u32,
    /// Root directory of the local vuln-list mirror
    pub vuln_list_dir: PathBuf,
}

impl UpdateRequest {
    pub fn new(base_url: String, retry: u32, vuln_list_dir: PathBuf) -> Self {
        Self {
            base_url,
            retry,
            vuln_list_dir,
        }
    }
}

impl Default for UpdateRequest {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ADVISORY_URL.to_string(),
            retry: DEFAULT_RETRY,
            vuln_list_dir: PathBuf::from(DEFAULT_VULN_LIST_DIR),
        }
    }
}
