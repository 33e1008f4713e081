//! Ledger errors.
//!
//! The mocked backend cannot fail; these kinds exist so a real chain
//! backend can answer honestly through the same trait.

use reelmark_core::ContentHash;
use thiserror::Error;

/// Failures of a content ledger backend.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The backend could not reach its network.
    #[error("ledger connection failed: {0}")]
    Connection(String),

    /// A registration transaction was rejected or lost.
    #[error("content registration failed: {0}")]
    Registration(String),

    /// The queried hash has no registration on the ledger.
    #[error("content hash not found on ledger: {0}")]
    NotFound(ContentHash),
}
