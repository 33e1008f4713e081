//! # reelmark-ledger - Content Ledger Capability
//!
//! Defines the [`ContentLedger`] adapter trait (register, verify, resolve
//! owner, transfer) and ships the mocked chain backend. The mock submits
//! nothing anywhere: receipts are derived locally by hashing the payload
//! with the current time, and verification is unconditionally affirmative.
//! A real chain-client backend implements the same trait and plugs into the
//! studio unchanged.
//!
//! ## What the mock does NOT give you
//!
//! Registration leaves no state behind. Verifying a hash never consults
//! prior registrations and always answers yes, with a fixed owner address.
//! Transfer returns a receipt without moving anything. These are properties
//! of the mocked design, preserved deliberately; the error kinds a real
//! backend needs ([`LedgerError`]) are defined but never produced here.

pub mod config;
pub mod error;
pub mod ledger;
pub mod mock;

pub use config::{LedgerConfig, LedgerConfigError};
pub use error::LedgerError;
pub use ledger::{ContentLedger, DEFAULT_CONTENT_TYPE};
pub use mock::{MockLedger, MOCK_OWNER_ADDRESS};
