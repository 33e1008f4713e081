//! # Verification Result
//!
//! The answer a ledger backend gives when asked whether a content hash is
//! registered. Produced fresh on every verification call and never
//! persisted.

use serde::{Deserialize, Serialize};

use crate::identity::{ContentHash, OwnerAddress};
use crate::temporal::Timestamp;

/// Outcome of a ledger verification query for one content hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Whether the ledger considers the hash registered. The mocked backend
    /// answers `true` unconditionally; only a real backend can say no.
    pub verified: bool,
    /// The hash the query was about.
    pub content_hash: ContentHash,
    /// Current owner of the registered content.
    pub owner: OwnerAddress,
    /// When this verification was performed.
    pub timestamp: Timestamp,
    /// Name of the network that answered.
    pub network: String,
}
