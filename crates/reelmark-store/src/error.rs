//! # Store Errors
//!
//! The two ways a disk-backed metadata store can fail: the filesystem, or
//! the JSON on it.

use thiserror::Error;

/// Failures of the metadata store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The filesystem operation failed (permissions, disk full, etc.).
    /// A merely missing record is not an error; `load` reports it as
    /// `Ok(None)`.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized, or a file on disk did not parse
    /// back into a record.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
