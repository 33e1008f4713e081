//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers that flow through the Reelmark
//! pipeline. These prevent accidental identifier confusion: you cannot pass
//! a `ContentHash` where a `TxHash` is expected.
//!
//! Two construction paths exist for the hash-shaped types:
//!
//! - `from_digest_bytes()` takes a raw SHA-256 digest and renders it. This
//!   is infallible and is the path used by the hashing and receipt code.
//! - `parse()` validates untrusted text (CLI arguments, stored JSON) and
//!   rejects anything that is not the canonical lowercase hex form.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Number of hex characters in a generator-produced content id.
pub const CONTENT_ID_HEX_LEN: usize = 16;

/// Number of hex characters in a content hash (a full SHA-256 digest).
pub const CONTENT_HASH_HEX_LEN: usize = 64;

/// Identity of a content record.
///
/// Generator-produced ids are always [`CONTENT_ID_HEX_LEN`] lowercase hex
/// characters, the truncated digest of prompt plus creation timestamp. The
/// metadata store does not require that shape; any non-empty string keys a
/// record on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(String);

impl ContentId {
    /// Wrap an id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id from a full digest hex string, truncated to
    /// [`CONTENT_ID_HEX_LEN`] characters.
    pub fn from_digest_hex(digest_hex: &str) -> Self {
        Self(digest_hex.chars().take(CONTENT_ID_HEX_LEN).collect())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A full content hash: 64 lowercase hex characters (SHA-256).
///
/// Identifies a piece of content by its bytes, or by its path string when
/// the content does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(String);

impl ContentHash {
    /// Render a raw 32-byte digest as a content hash.
    pub fn from_digest_bytes(bytes: [u8; 32]) -> Self {
        Self(hex_string(&bytes))
    }

    /// Validate an untrusted hash string.
    ///
    /// Accepts exactly 64 hex characters; uppercase input is normalized to
    /// the canonical lowercase form.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidContentHash`] on wrong length or
    /// non-hex characters.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let normalized = s.to_ascii_lowercase();
        if normalized.len() != CONTENT_HASH_HEX_LEN {
            return Err(CoreError::InvalidContentHash {
                value: s.to_string(),
                reason: format!(
                    "expected {CONTENT_HASH_HEX_LEN} hex characters, got {}",
                    normalized.len()
                ),
            });
        }
        if !normalized.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidContentHash {
                value: s.to_string(),
                reason: "non-hex character in hash".to_string(),
            });
        }
        Ok(Self(normalized))
    }

    /// The hash as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A ledger transaction receipt: `0x` followed by 64 lowercase hex
/// characters, 66 characters total.
///
/// Receipts are opaque; nothing in this design ties one back to queryable
/// ledger state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHash(String);

impl TxHash {
    /// Render a raw 32-byte digest as a `0x`-prefixed transaction hash.
    pub fn from_digest_bytes(bytes: [u8; 32]) -> Self {
        Self(format!("0x{}", hex_string(&bytes)))
    }

    /// Validate an untrusted transaction hash string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTxHash`] when the input is not `0x`
    /// followed by exactly 64 hex characters.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let Some(hex_part) = s.strip_prefix("0x") else {
            return Err(CoreError::InvalidTxHash {
                value: s.to_string(),
                reason: "missing 0x prefix".to_string(),
            });
        };
        let normalized = hex_part.to_ascii_lowercase();
        if normalized.len() != CONTENT_HASH_HEX_LEN {
            return Err(CoreError::InvalidTxHash {
                value: s.to_string(),
                reason: format!(
                    "expected {CONTENT_HASH_HEX_LEN} hex characters after 0x, got {}",
                    normalized.len()
                ),
            });
        }
        if !normalized.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidTxHash {
                value: s.to_string(),
                reason: "non-hex character after 0x".to_string(),
            });
        }
        Ok(Self(format!("0x{normalized}")))
    }

    /// The full `0x`-prefixed receipt as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TxHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A ledger account address. Free-form; the mocked ledger performs no
/// checksum or length validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerAddress(String);

impl OwnerAddress {
    /// Wrap an address string.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the address is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for OwnerAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render bytes as lowercase hex.
fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
