use crate::shared::Result;

/// FeedTransport port for retrieving resources from the advisory feed
///
/// This port abstracts the HTTP layer, including its own timeout and
/// retry behavior. Callers hand the transport a retry budget; how the
/// budget is spent (waits between attempts, connection reuse) is the
/// transport's own business.
pub trait FeedTransport {
    /// Fetches a feed resource and returns its raw bytes
    ///
    /// # Arguments
    /// * `url` - Absolute URL of the resource to fetch
    /// * `retries` - Number of attempts the transport may spend on this call
    ///
    /// # Errors
    /// Returns an error if every attempt fails with a transport error
    /// or a non-success HTTP status.
    fn fetch(&self, url: &str, retries: u32) -> Result<Vec<u8>>;
}

// Shared references are transports too, so callers can keep ownership
// of a transport while lending it to the pipeline.
impl<T: FeedTransport + ?Sized> FeedTransport for &T {
    fn fetch(&self, url: &str, retries: u32) -> Result<Vec<u8>> {
        (**self).fetch(url, retries)
    }
}
