/// Filesystem adapters for persisting advisory documents
mod advisory_store;

pub use advisory_store::FileSystemStore;
