//! # reelmark-crypto - Content Hashing
//!
//! Provides the digest primitives for Reelmark:
//!
//! - **Streaming SHA-256** over file bytes in fixed-size chunks, with the
//!   documented fallback of hashing the path string itself when the file
//!   does not exist yet.
//! - **`sha256_hex`** and **`sha256_digest`** over in-memory bytes, used
//!   by the content id and transaction receipt derivations.
//!
//! ## Crate Policy
//!
//! - Depends only on `reelmark-core` internally.
//! - No mocking of digest computation in tests; all tests hash real bytes.

pub mod content_hash;

pub use content_hash::{content_hash, content_hash_hex, sha256_digest, sha256_hex};
