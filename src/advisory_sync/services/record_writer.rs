use crate::advisory_sync::domain::AdvisoryRecord;
use crate::ports::outbound::AdvisoryStore;
use crate::shared::{Result, SyncError};
use std::path::{Path, PathBuf};

/// RecordWriter - persists one advisory record per document
///
/// Documents land at `<base_dir>/<sub_path>/<cve_id>.json`, pretty-printed.
/// Directory creation and overwrite semantics belong to the store.
pub struct RecordWriter<'a, S: AdvisoryStore> {
    store: &'a S,
    base_dir: PathBuf,
}

impl<'a, S: AdvisoryStore> RecordWriter<'a, S> {
    pub fn new(store: &'a S, base_dir: PathBuf) -> Self {
        Self { store, base_dir }
    }

    /// Serializes `record` and writes it at its deterministic path
    pub fn write_record(
        &self,
        sub_path: &Path,
        cve_id: &str,
        record: &AdvisoryRecord,
    ) -> Result<()> {
        let path = self
            .base_dir
            .join(sub_path)
            .join(format!("{}.json", cve_id));

        let contents = serde_json::to_string_pretty(record).map_err(|e| SyncError::Write {
            path: path.clone(),
            details: e.to_string(),
        })?;

        self.store.write_document(&path, &contents)
    }
}
