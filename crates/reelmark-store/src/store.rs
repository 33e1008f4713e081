//! # Metadata Store
//!
//! Filesystem layout, fixed:
//!
//! ```text
//! <root>/
//!   metadata/
//!     <id>.json        pretty-printed ContentRecord
//! ```
//!
//! Storing is an overwrite: a second record with the same id replaces the
//! first. Directories are created on first store, so constructing a store
//! never touches the disk and statistics on an uncreated store report zero
//! records.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use reelmark_core::{ContentId, ContentRecord};

use crate::error::StoreError;

/// File extension for persisted records.
const RECORD_EXT: &str = "json";

/// A file-backed store of content records keyed by id.
#[derive(Debug, Clone)]
pub struct MetadataStore {
    /// Root directory of the store.
    root: PathBuf,
    /// `<root>/metadata`, where record files live.
    metadata_dir: PathBuf,
}

/// Storage statistics, as reported by [`MetadataStore::stats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Root directory of the store.
    pub root: PathBuf,
    /// Directory holding the record files.
    pub metadata_dir: PathBuf,
    /// Number of persisted records.
    pub record_count: usize,
}

impl MetadataStore {
    /// Create a store rooted at the given directory. No directories are
    /// created until the first [`store`](Self::store) call.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let metadata_dir = root.join("metadata");
        Self { root, metadata_dir }
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The filesystem path a record with this id persists to.
    pub fn record_path(&self, id: &ContentId) -> PathBuf {
        self.metadata_dir
            .join(format!("{}.{RECORD_EXT}", id.as_str()))
    }

    /// Persist a record, overwriting any existing record with the same id.
    ///
    /// Returns the path the record was written to.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] when the directory cannot be created or the file
    /// cannot be written; [`StoreError::Serialization`] when the record does
    /// not serialize.
    pub fn store(&self, record: &ContentRecord) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.metadata_dir)?;
        let path = self.record_path(&record.id);
        let json = serde_json::to_vec_pretty(record)?;
        fs::write(&path, json)?;
        tracing::debug!(id = %record.id, path = %path.display(), "stored metadata record");
        Ok(path)
    }

    /// Load the record with this id, or `Ok(None)` if none was ever stored.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] for filesystem failures other than the file being
    /// absent; [`StoreError::Serialization`] when the file exists but does
    /// not parse back into a record.
    pub fn load(&self, id: &ContentId) -> Result<Option<ContentRecord>, StoreError> {
        let path = self.record_path(id);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(id = %id, "metadata record not found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let record = serde_json::from_slice(&bytes)?;
        Ok(Some(record))
    }

    /// Count the persisted records.
    ///
    /// An uncreated store (nothing stored yet) reports zero records rather
    /// than failing on the missing directory.
    pub fn stats(&self) -> Result<StoreStats, StoreError> {
        let record_count = match fs::read_dir(&self.metadata_dir) {
            Ok(entries) => entries
                .filter_map(Result::ok)
                .filter(|e| {
                    e.path().extension().and_then(|ext| ext.to_str()) == Some(RECORD_EXT)
                })
                .count(),
            Err(e) if e.kind() == ErrorKind::NotFound => 0,
            Err(e) => return Err(e.into()),
        };
        Ok(StoreStats {
            root: self.root.clone(),
            metadata_dir: self.metadata_dir.clone(),
            record_count,
        })
    }
}
