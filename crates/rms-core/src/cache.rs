//! Process-lifetime cache for the canonical record set.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing::info;

use rms_ingest::{Result, load_raw_table};
use rms_model::RecordSet;

use crate::normalize::normalize;

/// Loads and normalizes an export in one pass.
pub fn load_dataset(path: &Path) -> Result<RecordSet> {
    let table = load_raw_table(path)?;
    Ok(normalize(&table))
}

/// Read-through cache for the canonical record set.
///
/// The set is loaded at most once per process and shared immutably
/// thereafter; filtering and aggregation are read-only consumers of the
/// `Arc`. Concurrent first accesses collapse into a single load. A failed
/// load is returned to the caller and not cached, so the next access
/// retries.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    cell: OnceLock<Arc<RecordSet>>,
    init: Mutex<()>,
}

impl DatasetCache {
    /// Creates the cache without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the canonical record set, loading it on first access.
    pub fn get_or_load(&self) -> Result<Arc<RecordSet>> {
        if let Some(records) = self.cell.get() {
            return Ok(Arc::clone(records));
        }
        let _guard = self
            .init
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(records) = self.cell.get() {
            return Ok(Arc::clone(records));
        }
        let records = Arc::new(load_dataset(&self.path)?);
        info!(
            path = %self.path.display(),
            rows = records.len(),
            "canonical record set loaded"
        );
        let _ = self.cell.set(Arc::clone(&records));
        Ok(records)
    }

    /// Returns the cached set without loading, if already populated.
    pub fn get(&self) -> Option<Arc<RecordSet>> {
        self.cell.get().map(Arc::clone)
    }
}
