//! # Transfer Subcommand
//!
//! Transfer ownership of a content hash to a new address.

use anyhow::Result;
use clap::Args;

use reelmark_core::{ContentHash, OwnerAddress};
use reelmark_ledger::ContentLedger;
use reelmark_studio::Studio;

/// Arguments for the transfer subcommand.
#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Content hash to transfer: 64 hex characters.
    #[arg(long)]
    pub hash: String,

    /// Address of the new owner.
    #[arg(long)]
    pub to: String,
}

/// Transfer ownership and print the transaction receipt.
pub fn run(args: TransferArgs, studio: &Studio) -> Result<()> {
    let hash = ContentHash::parse(&args.hash)?;
    let new_owner = OwnerAddress::new(args.to);
    let receipt = studio.ledger().transfer_ownership(&hash, &new_owner)?;
    println!("{receipt}");
    Ok(())
}
