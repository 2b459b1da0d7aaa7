use crate::ports::outbound::AdvisoryStore;
use crate::shared::error::SyncError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemStore adapter for writing advisory documents to disk
///
/// This adapter implements the AdvisoryStore port on top of std::fs,
/// creating missing parent directories on demand.
pub struct FileSystemStore;

impl FileSystemStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvisoryStore for FileSystemStore {
    fn write_document(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SyncError::Write {
                path: path.to_path_buf(),
                details: format!("failed to create directory {}: {}", parent.display(), e),
            })?;
        }

        fs::write(path, contents).map_err(|e| SyncError::Write {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}
