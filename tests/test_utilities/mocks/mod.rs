/// Mock implementations for testing
mod mock_advisory_store;
mod mock_feed_transport;
mod mock_progress_reporter;

pub use mock_advisory_store::MockAdvisoryStore;
pub use mock_feed_transport::MockFeedTransport;
pub use mock_progress_reporter::MockProgressReporter;
