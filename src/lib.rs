//! photon-sync - Photon OS advisory mirror tool
//!
//! This library fetches the vulnerability advisories published by the
//! VMware Photon OS security feed and persists them to a local vuln-list
//! directory, one JSON document per CVE identifier per affected package,
//! following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`advisory_sync`): advisory models and the
//!   fetch-decode-persist pipeline services
//! - **Application Layer** (`application`): the update use case and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use photon_sync::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let transport = PhotonFeedClient::new()?;
//! let store = FileSystemStore::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create and execute the use case
//! let use_case = UpdateAdvisoriesUseCase::new(
//!     transport,
//!     store,
//!     progress_reporter,
//!     UpdateRequest::default(),
//! );
//! let summary = use_case.execute()?;
//! println!("saved {} records", summary.records_written);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod advisory_sync;
pub mod application;
pub mod cli;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::FileSystemStore;
    pub use crate::adapters::outbound::network::PhotonFeedClient;
    pub use crate::advisory_sync::domain::{AdvisoryRecord, VersionManifest};
    pub use crate::advisory_sync::services::{
        classify_identifier, record_sub_path, split_records, AdvisoryFetcher, IdentifierCheck,
        RecordWriter, VersionLister,
    };
    pub use crate::application::dto::{UpdateRequest, UpdateSummary};
    pub use crate::application::use_cases::UpdateAdvisoriesUseCase;
    pub use crate::ports::inbound::AdvisoryUpdatePort;
    pub use crate::ports::outbound::{AdvisoryStore, FeedTransport, ProgressReporter};
    pub use crate::shared::{ExitCode, Result, SyncError};
}
