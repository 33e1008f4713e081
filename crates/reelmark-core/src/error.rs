//! # Error Types
//!
//! Parse and validation errors for the core identifier and timestamp types.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations. Operational failures (storage I/O, ledger access,
//! generation) live in their own crates; this enum covers only the text
//! boundary of the core types.

use thiserror::Error;

/// Validation errors for core types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A content hash string was not 64 lowercase hex characters.
    #[error("invalid content hash {value:?}: {reason}")]
    InvalidContentHash {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A transaction hash string was not `0x` followed by 64 lowercase hex
    /// characters.
    #[error("invalid transaction hash {value:?}: {reason}")]
    InvalidTxHash {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A timestamp string failed to parse or used a non-UTC offset.
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}
