/// Data transfer objects for the application layer
pub mod update_request;
pub mod update_summary;

pub use update_request::UpdateRequest;
pub use update_summary::UpdateSummary;
