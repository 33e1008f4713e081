//! # Content Record
//!
//! The structured result of a generation call: request parameters combined
//! with the derived identifier, creation timestamp, target file path, and
//! free-form metadata. Created once by the generator and immutable
//! thereafter; the store persists it verbatim as pretty-printed JSON and the
//! ledger operations wrap it without modification.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::identity::ContentId;
use crate::temporal::Timestamp;

/// Lifecycle status of a content record.
///
/// The mocked generator completes synchronously, so `Generated` is the only
/// state a record is ever observed in. A real inference backend would extend
/// this with pending and failed states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    /// The record was produced by a generation call.
    Generated,
}

/// A generated piece of content and everything known about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Identity of the record: 16 hex characters derived from the prompt
    /// and creation timestamp.
    pub id: ContentId,
    /// The text prompt the content was generated from.
    pub prompt: String,
    /// Requested duration in seconds.
    pub duration: u32,
    /// Visual style preset (e.g. "realistic", "cinematic").
    pub style: String,
    /// Output resolution label (e.g. "1080p", "4K").
    pub resolution: String,
    /// Frames per second.
    pub fps: u32,
    /// Identifier of the model that produced the content.
    pub model: String,
    /// When the record was created.
    pub created_at: Timestamp,
    /// Where the generated file will live, relative to the content root.
    pub file_path: String,
    /// Lifecycle status.
    pub status: ContentStatus,
    /// Caller-supplied parameters plus derived fields such as
    /// `prompt_length` and `estimated_token_count`.
    pub metadata: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ContentRecord {
        let mut metadata = Map::new();
        metadata.insert("prompt_length".to_string(), Value::from(10u64));
        ContentRecord {
            id: ContentId::new("deadbeefdeadbeef"),
            prompt: "Test video".to_string(),
            duration: 10,
            style: "realistic".to_string(),
            resolution: "1080p".to_string(),
            fps: 30,
            model: "wan-2.5".to_string(),
            created_at: Timestamp::parse("2026-01-15T12:00:00.000000Z").unwrap(),
            file_path: "videos/deadbeefdeadbeef.mp4".to_string(),
            status: ContentStatus::Generated,
            metadata,
        }
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ContentStatus::Generated).unwrap();
        assert_eq!(json, "\"generated\"");
    }

    #[test]
    fn record_json_roundtrip_is_structurally_equal() {
        let record = sample_record();
        let json = serde_json::to_string_pretty(&record).unwrap();
        let back: ContentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn record_json_exposes_expected_fields() {
        let record = sample_record();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["status"], "generated");
        assert_eq!(value["id"], "deadbeefdeadbeef");
        assert_eq!(value["metadata"]["prompt_length"], 10);
    }
}
