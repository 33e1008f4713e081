//! # Register Subcommand
//!
//! Register a stored record's content hash on the ledger.

use anyhow::{bail, Result};
use clap::Args;

use reelmark_core::ContentId;
use reelmark_studio::Studio;

use crate::meta::parse_key_values;

/// Arguments for the register subcommand.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Id of a previously generated record.
    #[arg(long)]
    pub id: String,

    /// Additional metadata to record with the registration, as KEY=VALUE
    /// pairs.
    #[arg(long = "meta", value_name = "KEY=VALUE")]
    pub meta: Vec<String>,
}

/// Load the record, register it, print the transaction receipt.
pub fn run(args: RegisterArgs, studio: &Studio) -> Result<()> {
    let id = ContentId::new(args.id);
    let Some(record) = studio.store().load(&id)? else {
        bail!("no stored record with id {id}");
    };
    let metadata = parse_key_values(&args.meta)?;
    let receipt = studio.register_video(&record, &metadata)?;
    println!("{receipt}");
    Ok(())
}
