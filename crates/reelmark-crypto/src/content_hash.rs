//! # Content Hash Computation
//!
//! Computes the SHA-256 identifier for a piece of content. Existing files
//! are hashed by their bytes, streamed in fixed-size chunks so that large
//! video files are never held in memory. A path whose file does not exist
//! is hashed by its UTF-8 path string instead: records name their output
//! file before anything is rendered there, and the hash of the path is the
//! stand-in identifier until real bytes exist.
//!
//! A missing file is therefore not an error. A file that exists but cannot
//! be read is one, and the I/O error propagates to the caller.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use reelmark_core::ContentHash;

/// Chunk size for streaming file digests.
const HASH_CHUNK_BYTES: usize = 4096;

/// Compute the typed content hash for a path.
///
/// See [`content_hash_hex`] for the hashing rules.
///
/// # Errors
///
/// Returns the underlying I/O error when the file exists but reading it
/// fails.
pub fn content_hash(path: impl AsRef<Path>) -> Result<ContentHash, std::io::Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(hash_bytes(path.to_string_lossy().as_bytes()));
    }
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut chunk = [0u8; HASH_CHUNK_BYTES];
    loop {
        let read = file.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        hasher.update(&chunk[..read]);
    }
    Ok(ContentHash::from_digest_bytes(hasher.finalize().into()))
}

/// Compute the content hash for a path as a 64-character hex string.
///
/// The output is always exactly 64 lowercase hex characters, whether the
/// path names an existing file (bytes are hashed) or not (the path string
/// is hashed).
///
/// # Errors
///
/// Returns the underlying I/O error when the file exists but reading it
/// fails.
pub fn content_hash_hex(path: impl AsRef<Path>) -> Result<String, std::io::Error> {
    Ok(content_hash(path)?.as_str().to_string())
}

/// SHA-256 of in-memory bytes as the raw 32-byte digest.
///
/// The mock receipt derivation feeds this straight into
/// `TxHash::from_digest_bytes`.
pub fn sha256_digest(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

/// SHA-256 of in-memory bytes, rendered as 64 lowercase hex characters.
///
/// Shared by the content id derivation (prompt plus timestamp) and the
/// path-string fallback.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hash_bytes(bytes).as_str().to_string()
}

fn hash_bytes(bytes: &[u8]) -> ContentHash {
    ContentHash::from_digest_bytes(sha256_digest(bytes))
}
