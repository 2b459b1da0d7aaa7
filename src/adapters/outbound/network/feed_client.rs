use crate::ports::outbound::FeedTransport;
use crate::shared::Result;
use std::time::Duration;

/// PhotonFeedClient adapter for fetching resources from the advisory feed
///
/// This adapter implements the FeedTransport port over a blocking reqwest
/// client. The retry budget handed in by callers is spent here, with a
/// short growing wait between attempts; a non-success HTTP status counts
/// as a failed attempt.
pub struct PhotonFeedClient {
    client: reqwest::blocking::Client,
}

impl PhotonFeedClient {
    const TIMEOUT_SECONDS: u64 = 30;
    const RETRY_WAIT_MS: u64 = 100;

    /// Creates a new feed client with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("photon-sync/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    fn fetch_once(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            anyhow::bail!("feed returned status code {} for {}", response.status(), url);
        }

        Ok(response.bytes()?.to_vec())
    }
}

impl FeedTransport for PhotonFeedClient {
    fn fetch(&self, url: &str, retries: u32) -> Result<Vec<u8>> {
        let attempts = retries.max(1);
        let mut last_error = None;

        for attempt in 1..=attempts {
            match self.fetch_once(url) {
                Ok(payload) => return Ok(payload),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < attempts {
                        std::thread::sleep(Duration::from_millis(
                            Self::RETRY_WAIT_MS * attempt as u64,
                        ));
                    }
                }
            }
        }

        Err(last_error.unwrap())
    }
}
