//! Studio errors.
//!
//! One enum aggregating the failure surfaces of the composed parts, so
//! pipeline callers handle a single error type.

use thiserror::Error;

use reelmark_gen::GenError;
use reelmark_ledger::LedgerError;
use reelmark_store::StoreError;

/// Failures of the studio pipeline.
#[derive(Error, Debug)]
pub enum StudioError {
    /// The generation backend failed.
    #[error("generation failed: {0}")]
    Generation(#[from] GenError),

    /// Metadata could not be persisted or read back.
    #[error("metadata storage failed: {0}")]
    Storage(#[from] StoreError),

    /// The ledger backend failed.
    #[error("ledger operation failed: {0}")]
    Ledger(#[from] LedgerError),

    /// Content hashing hit an I/O failure on an existing file.
    #[error("content hashing failed: {0}")]
    Hashing(#[from] std::io::Error),
}
