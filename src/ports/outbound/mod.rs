/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (feed server, file system, console).
pub mod advisory_store;
pub mod feed_transport;
pub mod progress_reporter;

pub use advisory_store::AdvisoryStore;
pub use feed_transport::FeedTransport;
pub use progress_reporter::ProgressReporter;
