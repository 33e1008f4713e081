//! Ledger configuration.
//!
//! Network name, RPC endpoint, and signing credential for a chain backend.
//! Nothing here is validated against an actual network: the mock ignores
//! the endpoint and credential entirely, and a real backend validates on
//! connection, not at construction.

use url::Url;

/// Network name used when none is configured.
pub const DEFAULT_NETWORK: &str = "ethereum";

/// Configuration for a content ledger backend.
///
/// Custom `Debug` implementation redacts the `private_key` field to
/// prevent credential leakage in log output.
#[derive(Clone)]
pub struct LedgerConfig {
    /// Target network name (free-form, e.g. "ethereum", "polygon").
    pub network: String,
    /// RPC endpoint URL. Optional; unused by the mock.
    pub rpc_url: Option<Url>,
    /// Signing key for transactions. Optional; unused by the mock.
    pub private_key: Option<String>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK.to_string(),
            rpc_url: None,
            private_key: None,
        }
    }
}

impl std::fmt::Debug for LedgerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerConfig")
            .field("network", &self.network)
            .field("rpc_url", &self.rpc_url)
            .field(
                "private_key",
                &self.private_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl LedgerConfig {
    /// A configuration for the named network with no endpoint or key.
    pub fn for_network(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `REELMARK_LEDGER_NETWORK` (default: `ethereum`)
    /// - `REELMARK_RPC_URL` (optional)
    /// - `REELMARK_PRIVATE_KEY` (optional)
    ///
    /// # Errors
    ///
    /// Returns [`LedgerConfigError::InvalidRpcUrl`] when the endpoint
    /// variable is set but does not parse as a URL.
    pub fn from_env() -> Result<Self, LedgerConfigError> {
        let network =
            std::env::var("REELMARK_LEDGER_NETWORK").unwrap_or_else(|_| DEFAULT_NETWORK.to_string());
        let rpc_url = match std::env::var("REELMARK_RPC_URL") {
            Ok(raw) => Some(
                Url::parse(&raw)
                    .map_err(|e| LedgerConfigError::InvalidRpcUrl(raw, e.to_string()))?,
            ),
            Err(_) => None,
        };
        Ok(Self {
            network,
            rpc_url,
            private_key: std::env::var("REELMARK_PRIVATE_KEY").ok(),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum LedgerConfigError {
    #[error("invalid RPC URL {0:?}: {1}")]
    InvalidRpcUrl(String, String),
}
