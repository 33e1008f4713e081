//! # The Studio
//!
//! Composition of the four parts behind one interface. Each operation is
//! a short, fixed sequence over the members; the studio holds no state of
//! its own.

use std::path::Path;

use serde_json::{Map, Value};

use reelmark_core::{ContentHash, ContentRecord, OwnerAddress, TxHash, VerificationResult};
use reelmark_crypto::content_hash;
use reelmark_gen::{ContentGenerator, GenerationRequest, MockWanGenerator};
use reelmark_ledger::{ContentLedger, MockLedger, DEFAULT_CONTENT_TYPE};
use reelmark_store::MetadataStore;

use crate::config::StudioConfig;
use crate::error::StudioError;

/// Main interface for the Reelmark pipeline.
///
/// Combines content generation with ledger-backed registration for
/// provenance and ownership tracking.
pub struct Studio {
    generator: Box<dyn ContentGenerator>,
    ledger: Box<dyn ContentLedger>,
    store: MetadataStore,
}

impl Studio {
    /// Build a studio wired with the shipped mock backends.
    pub fn new(config: StudioConfig) -> Self {
        let store = MetadataStore::new(config.storage_root.clone());
        Self::with_backends(
            Box::new(MockWanGenerator::new(config.generator)),
            Box::new(MockLedger::new(config.ledger)),
            store,
        )
    }

    /// Build a studio over explicit backends.
    ///
    /// This is the substitution point for real services: hand in a live
    /// chain client or inference-API adapter and the pipeline code is
    /// unchanged.
    pub fn with_backends(
        generator: Box<dyn ContentGenerator>,
        ledger: Box<dyn ContentLedger>,
        store: MetadataStore,
    ) -> Self {
        tracing::debug!(
            generator = generator.backend_name(),
            ledger = ledger.backend_name(),
            root = %store.root().display(),
            "studio assembled"
        );
        Self {
            generator,
            ledger,
            store,
        }
    }

    /// The metadata store.
    pub fn store(&self) -> &MetadataStore {
        &self.store
    }

    /// The generation backend.
    pub fn generator(&self) -> &dyn ContentGenerator {
        self.generator.as_ref()
    }

    /// The ledger backend.
    pub fn ledger(&self) -> &dyn ContentLedger {
        self.ledger.as_ref()
    }

    /// Generate content for a request and persist its metadata.
    ///
    /// One disk write per call; the returned record is exactly what was
    /// persisted.
    pub fn generate_video(
        &self,
        request: &GenerationRequest,
    ) -> Result<ContentRecord, StudioError> {
        let record = self.generator.generate(request)?;
        let path = self.store.store(&record)?;
        tracing::info!(
            id = %record.id,
            metadata_path = %path.display(),
            "video record generated and stored"
        );
        Ok(record)
    }

    /// Register a generated record's content on the ledger.
    ///
    /// The record's file path is content-hashed (bytes when the file
    /// exists, path string otherwise) and the hash registered with the
    /// given metadata.
    pub fn register_video(
        &self,
        record: &ContentRecord,
        metadata: &Map<String, Value>,
    ) -> Result<TxHash, StudioError> {
        let hash = content_hash(&record.file_path)?;
        let receipt = self
            .ledger
            .register_content(&hash, metadata, DEFAULT_CONTENT_TYPE)?;
        tracing::info!(id = %record.id, content_hash = %hash, tx = %receipt, "video registered");
        Ok(receipt)
    }

    /// Verify a content hash against the ledger.
    pub fn verify_video(&self, hash: &ContentHash) -> Result<VerificationResult, StudioError> {
        Ok(self.ledger.verify_content(hash)?)
    }

    /// Resolve the current owner of a content hash.
    pub fn video_ownership(&self, hash: &ContentHash) -> Result<OwnerAddress, StudioError> {
        Ok(self.ledger.owner_of(hash)?)
    }

    /// Content-hash an arbitrary path with the pipeline's hashing rules.
    pub fn content_hash(&self, path: impl AsRef<Path>) -> Result<ContentHash, StudioError> {
        Ok(content_hash(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn studio_in(dir: &Path) -> Studio {
        Studio::new(StudioConfig {
            storage_root: dir.to_path_buf(),
            ..StudioConfig::default()
        })
    }

    #[test]
    fn generate_video_persists_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let studio = studio_in(dir.path());

        let record = studio
            .generate_video(&GenerationRequest::new("Test video"))
            .unwrap();

        let loaded = studio.store().load(&record.id).unwrap();
        assert_eq!(loaded.as_ref(), Some(&record));
    }

    #[test]
    fn register_video_hashes_the_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let studio = studio_in(dir.path());
        let record = studio
            .generate_video(&GenerationRequest::new("Test video for registration"))
            .unwrap();

        let receipt = studio.register_video(&record, &Map::new()).unwrap();
        assert_eq!(receipt.as_str().len(), 66);
        assert!(receipt.as_str().starts_with("0x"));

        // No file exists at the record's path, so the hash the ledger saw
        // is the path-string fallback.
        let hash = studio.content_hash(&record.file_path).unwrap();
        assert_eq!(
            hash.as_str(),
            reelmark_crypto::sha256_hex(record.file_path.as_bytes())
        );
    }

    #[test]
    fn verify_and_ownership_delegate_to_the_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let studio = studio_in(dir.path());
        let record = studio
            .generate_video(&GenerationRequest::new("Test video"))
            .unwrap();
        let hash = studio.content_hash(&record.file_path).unwrap();

        let verification = studio.verify_video(&hash).unwrap();
        assert!(verification.verified);
        assert_eq!(verification.content_hash, hash);

        let owner = studio.video_ownership(&hash).unwrap();
        assert_eq!(owner, verification.owner);
        assert!(!owner.is_empty());
    }

    #[test]
    fn backend_names_are_the_mocks() {
        let dir = tempfile::tempdir().unwrap();
        let studio = studio_in(dir.path());
        assert_eq!(studio.generator().backend_name(), "MockWanGenerator");
        assert_eq!(studio.ledger().backend_name(), "MockLedger");
    }
}
