use crate::shared::Result;
use std::path::Path;

/// AdvisoryStore port for persisting advisory documents
///
/// This port abstracts the storage backend so the pipeline can be tested
/// without touching the real file system.
pub trait AdvisoryStore {
    /// Writes one advisory document at the given path
    ///
    /// Missing intermediate directories are created. An existing document
    /// at the same path is overwritten without warning (last write wins).
    ///
    /// # Errors
    /// Returns an error on any I/O failure (permissions, disk full,
    /// invalid path).
    fn write_document(&self, path: &Path, contents: &str) -> Result<()>;
}

impl<S: AdvisoryStore + ?Sized> AdvisoryStore for &S {
    fn write_document(&self, path: &Path, contents: &str) -> Result<()> {
        (**self).write_document(path, contents)
    }
}
