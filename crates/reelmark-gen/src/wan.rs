//! # Mock Wan 2.5 Backend
//!
//! Constructs content records the way the real Wan 2.5 integration would,
//! without calling anything. The record id is the SHA-256 of the prompt
//! concatenated with the creation timestamp, truncated to 16 hex
//! characters. Identifiers therefore depend on the wall clock: the same
//! prompt generated at two instants yields two ids, and id stability across
//! calls is deliberately not provided.
//!
//! Two generations of the same prompt within the same microsecond would
//! collide; no nonce guards against that.

use serde_json::Value;

use reelmark_core::{ContentId, ContentRecord, ContentStatus, Timestamp};
use reelmark_crypto::sha256_hex;

use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::generator::{
    ContentGenerator, GenerationRequest, GenerationState, GenerationStatus,
};

/// Model identifier stamped into every record this backend produces.
pub const WAN_MODEL_VERSION: &str = "wan-2.5";

/// The mocked Wan 2.5 generation backend.
#[derive(Debug, Clone)]
pub struct MockWanGenerator {
    config: GeneratorConfig,
}

impl MockWanGenerator {
    /// Create a mock backend. The configured API key is carried but unused.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration this backend was built with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Derive the record id for a prompt created at an instant.
    fn derive_id(prompt: &str, created_at: &Timestamp) -> ContentId {
        let digest = sha256_hex(format!("{prompt}{}", created_at.to_rfc3339()).as_bytes());
        ContentId::from_digest_hex(&digest)
    }

    /// Construct the record for a request as of a fixed instant.
    ///
    /// Pure data construction: everything in the result is a function of
    /// the request and `created_at`. [`ContentGenerator::generate`] calls
    /// this with the current time; tests call it directly to pin the clock.
    pub fn generate_at(&self, request: &GenerationRequest, created_at: Timestamp) -> ContentRecord {
        let id = Self::derive_id(&request.prompt, &created_at);

        let mut metadata = serde_json::Map::new();
        metadata.insert(
            "prompt_length".to_string(),
            Value::from(request.prompt.chars().count() as u64),
        );
        metadata.insert(
            "estimated_token_count".to_string(),
            Value::from(request.prompt.split_whitespace().count() as u64),
        );
        // Caller-supplied parameters win over the derived fields.
        for (key, value) in &request.extra {
            metadata.insert(key.clone(), value.clone());
        }

        ContentRecord {
            file_path: format!("videos/{}.mp4", id.as_str()),
            id,
            prompt: request.prompt.clone(),
            duration: request.duration,
            style: request.style.clone(),
            resolution: request.resolution.clone(),
            fps: request.fps,
            model: WAN_MODEL_VERSION.to_string(),
            created_at,
            status: ContentStatus::Generated,
            metadata,
        }
    }
}

impl ContentGenerator for MockWanGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<ContentRecord, GenError> {
        let record = self.generate_at(request, Timestamp::now());
        tracing::info!(
            id = %record.id,
            model = WAN_MODEL_VERSION,
            duration = record.duration,
            style = %record.style,
            "generated content record"
        );
        Ok(record)
    }

    fn generation_status(&self, id: &ContentId) -> Result<GenerationStatus, GenError> {
        // The mock completes synchronously, so every id reports done.
        Ok(GenerationStatus {
            id: id.clone(),
            status: GenerationState::Completed,
            progress: 100,
        })
    }

    fn backend_name(&self) -> &str {
        "MockWanGenerator"
    }
}
