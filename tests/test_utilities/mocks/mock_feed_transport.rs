use photon_sync::prelude::*;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock FeedTransport that replays canned responses and records every call
///
/// URLs without a registered response fail, so tests catch unexpected
/// fetches (e.g. for the `dev` branch).
pub struct MockFeedTransport {
    responses: HashMap<String, Vec<u8>>,
    failures: HashMap<String, usize>,
    requests: Mutex<Vec<String>>,
}

impl MockFeedTransport {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            failures: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Registers the body served for `url`
    pub fn with_response(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), body.as_bytes().to_vec());
        self
    }

    /// Makes the first `count` calls for `url` fail before any registered
    /// response is served; without a response the URL keeps failing
    pub fn with_failures(mut self, url: &str, count: usize) -> Self {
        self.failures.insert(url.to_string(), count);
        self
    }

    /// Every URL requested so far, in call order (duplicates preserved)
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of calls made for one specific URL
    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|requested| requested.as_str() == url)
            .count()
    }
}

impl Default for MockFeedTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedTransport for MockFeedTransport {
    fn fetch(&self, url: &str, _retries: u32) -> Result<Vec<u8>> {
        let call_number = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(url.to_string());
            requests
                .iter()
                .filter(|requested| requested.as_str() == url)
                .count()
        };

        if let Some(&failure_count) = self.failures.get(url) {
            if call_number <= failure_count {
                anyhow::bail!("simulated transport failure for {url}");
            }
        }

        match self.responses.get(url) {
            Some(body) => Ok(body.clone()),
            None => anyhow::bail!("no response registered for {url}"),
        }
    }
}
