//! # reelmark-gen - Content Generation Capability
//!
//! Defines the [`ContentGenerator`] adapter trait and ships the mocked
//! Wan 2.5 backend. The mock performs no inference and makes no network
//! call; it deterministically constructs a content record from the request
//! and the clock. A real inference-API backend implements the same trait
//! and plugs into the studio unchanged.
//!
//! ## Crate Policy
//!
//! - Adapters are object-safe and `Send + Sync` so the studio can hold
//!   `Box<dyn ContentGenerator>` and swap backends at construction.
//! - The mock's record construction is pure given a timestamp; the clock
//!   is injected through `generate_at` so tests control it.

pub mod config;
pub mod error;
pub mod generator;
pub mod wan;

pub use config::GeneratorConfig;
pub use error::GenError;
pub use generator::{
    ContentGenerator, GenerationRequest, GenerationState, GenerationStatus,
    DEFAULT_DURATION_SECS, DEFAULT_FPS, DEFAULT_RESOLUTION, DEFAULT_STYLE,
};
pub use wan::{MockWanGenerator, WAN_MODEL_VERSION};
