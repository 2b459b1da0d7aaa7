use photon_sync::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Mock AdvisoryStore that keeps documents in memory
pub struct MockAdvisoryStore {
    documents: Mutex<HashMap<PathBuf, String>>,
    fail: bool,
}

impl MockAdvisoryStore {
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            fail: false,
        }
    }

    /// A store whose every write fails
    pub fn with_failure() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            fail: true,
        }
    }

    pub fn document(&self, path: &Path) -> Option<String> {
        self.documents.lock().unwrap().get(path).cloned()
    }

    pub fn document_count(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.documents.lock().unwrap().keys().cloned().collect()
    }
}

impl Default for MockAdvisoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvisoryStore for MockAdvisoryStore {
    fn write_document(&self, path: &Path, contents: &str) -> Result<()> {
        if self.fail {
            anyhow::bail!("simulated store failure for {}", path.display());
        }
        self.documents
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
