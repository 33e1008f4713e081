//! # reelmark-studio - Pipeline Orchestration
//!
//! [`Studio`] is the main interface of the workspace. It owns one backend
//! per capability (generation, ledger) plus the metadata store, and runs
//! the fixed pipeline: generate a record, persist its metadata, hash the
//! content path, register the hash, verify and resolve ownership.
//!
//! Backends are held behind the capability traits, so a studio wired with
//! the shipped mocks and one wired with real services run the same
//! orchestration code. See [`Studio::with_backends`].
//!
//! The pipeline is synchronous and single-threaded: every operation is a
//! direct computation or a blocking file read/write, and nothing here
//! suspends or locks.

pub mod config;
pub mod error;
pub mod studio;

pub use config::StudioConfig;
pub use error::StudioError;
pub use studio::Studio;
