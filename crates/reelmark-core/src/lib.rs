//! # reelmark-core - Foundational Types for Reelmark
//!
//! This crate is the bedrock of the Reelmark workspace. It defines the
//! type-system primitives shared by the generator, metadata store, ledger,
//! and studio orchestrator. Every other crate in the workspace depends on
//! `reelmark-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `ContentId`, `ContentHash`,
//!    `TxHash`, `OwnerAddress`. No bare strings for identifiers, so a content
//!    hash cannot be passed where a transaction hash is expected.
//!
//! 2. **Validated constructors at the text boundary.** `ContentHash::parse()`
//!    and `TxHash::parse()` reject malformed input; the infallible
//!    `from_digest_bytes()` constructors are the digest-producing path.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix at microsecond precision. Content identifiers and transaction
//!    receipts derive from timestamp text, so the rendering is fixed here.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `reelmark-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod record;
pub mod temporal;
pub mod verification;

// Re-export primary types for ergonomic imports.
pub use error::CoreError;
pub use identity::{ContentHash, ContentId, OwnerAddress, TxHash};
pub use record::{ContentRecord, ContentStatus};
pub use temporal::Timestamp;
pub use verification::VerificationResult;
