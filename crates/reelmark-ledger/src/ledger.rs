//! # Ledger Capability
//!
//! The adapter trait every ledger backend implements.

use serde_json::{Map, Value};

use reelmark_core::{ContentHash, OwnerAddress, TxHash, VerificationResult};

use crate::error::LedgerError;

/// Content type recorded with a registration when the caller has nothing
/// more specific.
pub const DEFAULT_CONTENT_TYPE: &str = "video";

/// Adapter trait for content ledger backends.
///
/// Implementations must be `Send + Sync` and object-safe so the studio can
/// hold one behind `Box<dyn ContentLedger>` and select the backend at
/// construction (mock vs. live chain client).
pub trait ContentLedger: Send + Sync {
    /// Register a content hash with accompanying metadata.
    ///
    /// Returns the transaction receipt: `0x` followed by 64 lowercase hex
    /// characters.
    fn register_content(
        &self,
        content_hash: &ContentHash,
        metadata: &Map<String, Value>,
        content_type: &str,
    ) -> Result<TxHash, LedgerError>;

    /// Ask the ledger whether a content hash is registered, and by whom.
    fn verify_content(&self, content_hash: &ContentHash)
        -> Result<VerificationResult, LedgerError>;

    /// Resolve the current owner of a registered content hash.
    ///
    /// The provided implementation delegates to
    /// [`verify_content`](Self::verify_content) and extracts the owner.
    fn owner_of(&self, content_hash: &ContentHash) -> Result<OwnerAddress, LedgerError> {
        Ok(self.verify_content(content_hash)?.owner)
    }

    /// Transfer ownership of a registered content hash to a new address.
    ///
    /// Returns the transaction receipt.
    fn transfer_ownership(
        &self,
        content_hash: &ContentHash,
        new_owner: &OwnerAddress,
    ) -> Result<TxHash, LedgerError>;

    /// Human-readable name of this backend implementation
    /// (e.g. "MockLedger").
    fn backend_name(&self) -> &str;
}
