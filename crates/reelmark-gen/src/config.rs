//! Generator configuration.
//!
//! The mocked backend never uses the API key; it is carried so that a real
//! Wan-API backend can be constructed from the same configuration. No
//! validation is performed here; the mock has nothing to validate against,
//! and a real backend validates on first call.

/// Configuration for a content generation backend.
///
/// Custom `Debug` implementation redacts the `api_key` field to prevent
/// credential leakage in log output.
#[derive(Clone, Default)]
pub struct GeneratorConfig {
    /// API key for the inference service. Optional; unused by the mock.
    pub api_key: Option<String>,
}

impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl GeneratorConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `REELMARK_WAN_API_KEY` (optional)
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("REELMARK_WAN_API_KEY").ok(),
        }
    }
}
