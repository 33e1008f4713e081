//! Studio configuration.
//!
//! One struct aggregating the per-backend configurations and the storage
//! root, passed explicitly at construction. Environment loading is a
//! convenience on top, not a hidden dependency of the constructors.

use std::path::PathBuf;

use reelmark_gen::GeneratorConfig;
use reelmark_ledger::{LedgerConfig, LedgerConfigError};

/// Storage root used when none is configured.
pub const DEFAULT_STORAGE_ROOT: &str = "./videos";

/// Configuration for a [`Studio`](crate::Studio).
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Root directory for content and metadata storage.
    pub storage_root: PathBuf,
    /// Ledger backend configuration.
    pub ledger: LedgerConfig,
    /// Generator backend configuration.
    pub generator: GeneratorConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            storage_root: PathBuf::from(DEFAULT_STORAGE_ROOT),
            ledger: LedgerConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl StudioConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `REELMARK_STORAGE_ROOT` (default: `./videos`)
    /// - plus everything read by [`LedgerConfig::from_env`] and
    ///   [`GeneratorConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Propagates [`LedgerConfigError`] from the ledger configuration.
    pub fn from_env() -> Result<Self, LedgerConfigError> {
        Ok(Self {
            storage_root: std::env::var("REELMARK_STORAGE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_ROOT)),
            ledger: LedgerConfig::from_env()?,
            generator: GeneratorConfig::from_env(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_storage_root() {
        let cfg = StudioConfig::default();
        assert_eq!(cfg.storage_root, PathBuf::from("./videos"));
        assert_eq!(cfg.ledger.network, "ethereum");
    }
}
