//! # Generator Capability
//!
//! The adapter trait every generation backend implements, plus the request
//! and status types that cross it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use reelmark_core::{ContentId, ContentRecord};

use crate::error::GenError;

/// Default clip duration in seconds.
pub const DEFAULT_DURATION_SECS: u32 = 10;
/// Default visual style preset.
pub const DEFAULT_STYLE: &str = "realistic";
/// Default output resolution label.
pub const DEFAULT_RESOLUTION: &str = "1080p";
/// Default frames per second.
pub const DEFAULT_FPS: u32 = 30;

/// A content generation request.
///
/// Only the prompt is required; everything else defaults. `extra` carries
/// backend-specific parameters verbatim into the record's metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Text description of the content to generate.
    pub prompt: String,
    /// Duration in seconds.
    pub duration: u32,
    /// Visual style preset.
    pub style: String,
    /// Output resolution label.
    pub resolution: String,
    /// Frames per second.
    pub fps: u32,
    /// Additional generation parameters, merged into record metadata.
    pub extra: Map<String, Value>,
}

impl GenerationRequest {
    /// A request for this prompt with all other fields at their defaults.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            duration: DEFAULT_DURATION_SECS,
            style: DEFAULT_STYLE.to_string(),
            resolution: DEFAULT_RESOLUTION.to_string(),
            fps: DEFAULT_FPS,
            extra: Map::new(),
        }
    }
}

/// Progress state of a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationState {
    /// Generation finished.
    Completed,
}

/// Status report for one generation, as returned by
/// [`ContentGenerator::generation_status`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStatus {
    /// The content the report is about.
    pub id: ContentId,
    /// Current state.
    pub status: GenerationState,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
}

/// Adapter trait for content generation backends.
///
/// Implementations must be `Send + Sync` and object-safe so the studio can
/// hold one behind `Box<dyn ContentGenerator>` and select the backend at
/// construction (mock vs. live inference API).
pub trait ContentGenerator: Send + Sync {
    /// Produce a content record for the request.
    fn generate(&self, request: &GenerationRequest) -> Result<ContentRecord, GenError>;

    /// Report the progress of a previously requested generation.
    fn generation_status(&self, id: &ContentId) -> Result<GenerationStatus, GenError>;

    /// Human-readable name of this backend implementation
    /// (e.g. "MockWanGenerator").
    fn backend_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_match_documented_values() {
        let req = GenerationRequest::new("A test prompt");
        assert_eq!(req.duration, 10);
        assert_eq!(req.style, "realistic");
        assert_eq!(req.resolution, "1080p");
        assert_eq!(req.fps, 30);
        assert!(req.extra.is_empty());
    }

    #[test]
    fn generation_state_serializes_lowercase() {
        let json = serde_json::to_string(&GenerationState::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }
}
