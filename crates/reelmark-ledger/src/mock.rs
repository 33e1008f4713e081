//! # Mock Ledger Backend
//!
//! Simulates chain interaction with local hashing. Receipts are the
//! SHA-256 of the payload concatenated with the current timestamp, so they
//! look like transaction hashes and differ across calls, but nothing is
//! submitted anywhere and no registration state accumulates.
//!
//! Because the timestamp has microsecond resolution, two receipts derived
//! in the same microsecond from the same payload would collide. Nothing
//! guards against that here.
//!
//! The only state is the connected flag, which moves one way: any
//! registration on a disconnected ledger connects it first, and there is
//! no disconnect.

use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::{Map, Value};

use reelmark_core::{ContentHash, OwnerAddress, Timestamp, TxHash, VerificationResult};
use reelmark_crypto::sha256_digest;

use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::ledger::ContentLedger;

/// The owner address every mock verification reports.
pub const MOCK_OWNER_ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb";

/// The mocked chain backend.
pub struct MockLedger {
    config: LedgerConfig,
    connected: AtomicBool,
}

impl MockLedger {
    /// Create a mock backend for the configured network. The RPC endpoint
    /// and private key are carried but never used.
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            connected: AtomicBool::new(false),
        }
    }

    /// The configuration this backend was built with.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Establish the (simulated) network connection.
    ///
    /// Always succeeds, is idempotent, and returns the connected state.
    pub fn connect(&self) -> bool {
        if !self.connected.swap(true, Ordering::Relaxed) {
            tracing::debug!(network = %self.config.network, "mock ledger connected");
        }
        true
    }

    /// Whether a connection has been established.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    /// Derive a receipt from a payload as of an instant.
    fn derive_receipt(payload: &str, at: &Timestamp) -> TxHash {
        let digest = sha256_digest(format!("{payload}{}", at.to_rfc3339()).as_bytes());
        TxHash::from_digest_bytes(digest)
    }
}

impl ContentLedger for MockLedger {
    fn register_content(
        &self,
        content_hash: &ContentHash,
        metadata: &Map<String, Value>,
        content_type: &str,
    ) -> Result<TxHash, LedgerError> {
        if !self.is_connected() {
            self.connect();
        }

        // Simulated registration: the receipt is derived, not submitted,
        // and the metadata goes nowhere. Verification will not see this.
        let receipt = Self::derive_receipt(content_hash.as_str(), &Timestamp::now());
        tracing::info!(
            content_hash = %content_hash,
            content_type,
            metadata_fields = metadata.len(),
            tx = %receipt,
            network = %self.config.network,
            "registered content on mock ledger"
        );
        Ok(receipt)
    }

    fn verify_content(
        &self,
        content_hash: &ContentHash,
    ) -> Result<VerificationResult, LedgerError> {
        // The mock affirms every hash with a fixed owner, registered or
        // not. Only a real backend can answer no.
        Ok(VerificationResult {
            verified: true,
            content_hash: content_hash.clone(),
            owner: OwnerAddress::new(MOCK_OWNER_ADDRESS),
            timestamp: Timestamp::now(),
            network: self.config.network.clone(),
        })
    }

    fn transfer_ownership(
        &self,
        content_hash: &ContentHash,
        new_owner: &OwnerAddress,
    ) -> Result<TxHash, LedgerError> {
        let payload = format!("{}{}", content_hash.as_str(), new_owner.as_str());
        let receipt = Self::derive_receipt(&payload, &Timestamp::now());
        tracing::info!(
            content_hash = %content_hash,
            new_owner = %new_owner,
            tx = %receipt,
            "transferred ownership on mock ledger"
        );
        Ok(receipt)
    }

    fn backend_name(&self) -> &str {
        "MockLedger"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> MockLedger {
        MockLedger::new(LedgerConfig::default())
    }

    fn some_hash() -> ContentHash {
        ContentHash::parse(&"ab".repeat(32)).unwrap()
    }

    // -- receipts -----------------------------------------------------------

    #[test]
    fn register_receipt_is_66_chars_with_prefix() {
        let tx = ledger()
            .register_content(&some_hash(), &Map::new(), "video")
            .unwrap();
        assert_eq!(tx.as_str().len(), 66);
        assert!(tx.as_str().starts_with("0x"));
        assert!(tx.as_str()[2..]
            .bytes()
            .all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }

    #[test]
    fn transfer_receipt_is_66_chars_with_prefix() {
        let tx = ledger()
            .transfer_ownership(&some_hash(), &OwnerAddress::new("0xnewowner"))
            .unwrap();
        assert_eq!(tx.as_str().len(), 66);
        assert!(tx.as_str().starts_with("0x"));
    }

    #[test]
    fn receipt_derivation_is_deterministic_for_a_fixed_clock() {
        let at = Timestamp::parse("2026-01-15T12:00:00.000000Z").unwrap();
        let a = MockLedger::derive_receipt("payload", &at);
        let b = MockLedger::derive_receipt("payload", &at);
        assert_eq!(a, b);
    }

    #[test]
    fn receipts_differ_across_instants_and_payloads() {
        let t1 = Timestamp::parse("2026-01-15T12:00:00.000000Z").unwrap();
        let t2 = Timestamp::parse("2026-01-15T12:00:00.000001Z").unwrap();
        assert_ne!(
            MockLedger::derive_receipt("payload", &t1),
            MockLedger::derive_receipt("payload", &t2)
        );
        assert_ne!(
            MockLedger::derive_receipt("a", &t1),
            MockLedger::derive_receipt("b", &t1)
        );
    }

    // -- connection ---------------------------------------------------------

    #[test]
    fn connect_is_idempotent_and_always_true() {
        let ledger = ledger();
        assert!(!ledger.is_connected());
        assert!(ledger.connect());
        assert!(ledger.is_connected());
        assert!(ledger.connect());
        assert!(ledger.is_connected());
    }

    #[test]
    fn register_auto_connects() {
        let ledger = ledger();
        assert!(!ledger.is_connected());
        ledger
            .register_content(&some_hash(), &Map::new(), "video")
            .unwrap();
        assert!(ledger.is_connected());
    }

    // -- verification (mock-only behavior) ----------------------------------

    #[test]
    fn verify_affirms_unregistered_hash() {
        // Mock-only behavior: nothing was registered, yet verification
        // still answers yes. A real backend must not do this.
        let result = ledger().verify_content(&some_hash()).unwrap();
        assert!(result.verified);
        assert_eq!(result.owner.as_str(), MOCK_OWNER_ADDRESS);
        assert_eq!(result.network, "ethereum");
        assert_eq!(result.content_hash, some_hash());
    }

    #[test]
    fn verify_ignores_registration_state() {
        // Mock-only behavior: the answer is identical before and after
        // registration, because the mock persists nothing.
        let ledger = ledger();
        let before = ledger.verify_content(&some_hash()).unwrap();
        ledger
            .register_content(&some_hash(), &Map::new(), "video")
            .unwrap();
        let after = ledger.verify_content(&some_hash()).unwrap();
        assert_eq!(before.verified, after.verified);
        assert_eq!(before.owner, after.owner);
    }

    #[test]
    fn verify_reports_configured_network() {
        let ledger = MockLedger::new(LedgerConfig::for_network("polygon"));
        let result = ledger.verify_content(&some_hash()).unwrap();
        assert_eq!(result.network, "polygon");
    }

    // -- ownership ----------------------------------------------------------

    #[test]
    fn owner_of_matches_verification_owner() {
        let ledger = ledger();
        let owner = ledger.owner_of(&some_hash()).unwrap();
        assert_eq!(owner.as_str(), MOCK_OWNER_ADDRESS);
        assert!(!owner.is_empty());
    }

    #[test]
    fn transfer_does_not_move_ownership() {
        // Mock-only behavior: there is no ownership state to move, so the
        // reported owner is unchanged after a transfer.
        let ledger = ledger();
        ledger
            .transfer_ownership(&some_hash(), &OwnerAddress::new("0xsomeoneelse"))
            .unwrap();
        assert_eq!(
            ledger.owner_of(&some_hash()).unwrap().as_str(),
            MOCK_OWNER_ADDRESS
        );
    }
}
