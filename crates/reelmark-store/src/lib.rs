//! # reelmark-store - Metadata Persistence
//!
//! Stores content records on disk as pretty-printed JSON, one file per
//! record at `<root>/metadata/<id>.json`. Loading a record that was never
//! stored is an ordinary outcome (`Ok(None)`), not an error; callers branch
//! on presence.
//!
//! ## Crate Policy
//!
//! - Depends only on `reelmark-core` internally.
//! - Every I/O and serialization failure is classified in [`StoreError`];
//!   nothing panics on a bad disk.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::{MetadataStore, StoreStats};
